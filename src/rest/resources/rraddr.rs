//! The `RRADDR` resource kind.

use crate::rest::{FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `RRADDR` kind.
pub static RRADDR: ResourceSchema = ResourceSchema::new(
    "RRADDR",
    "RRADDR/",
    &[
        FieldDescriptor::link("ipblock", "Ipblock").with_display_name("Ipblock"),
        FieldDescriptor::link("rr", "RR").with_display_name("Resource Record"),
        FieldDescriptor::string("ttl").with_display_name("TTL"),
    ],
)
.with_views(&[
    View::new("all", &["ipblock", "rr", "ttl"]),
    View::new("brief", &["rr", "ipblock"]),
])
.with_label(&["ipblock", "rr"], " ");

/// A DNS `A`/`AAAA` record linking an owner record to an address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RrAddr;

impl NetdotResource for RrAddr {
    fn schema() -> &'static ResourceSchema {
        &RRADDR
    }
}
