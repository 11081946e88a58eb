//! The `IpblockStatus` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `IpblockStatus` kind.
pub static IPBLOCK_STATUS: ResourceSchema = ResourceSchema::new(
    "IpblockStatus",
    "IpblockStatus/",
    &[
        FieldDescriptor::string("name"),
    ],
)
.with_views(&[
    View::new("all", &["name"]),
    View::new("brief", &["name"]),
])
.with_label(&["name"], " ")
.with_collections(&[
    Collection::new("ipblocks", "Ipblock", "status"),
]);

/// Status of an IP block (`Subnet`, `Container`, `Static`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IpblockStatus;

impl NetdotResource for IpblockStatus {
    fn schema() -> &'static ResourceSchema {
        &IPBLOCK_STATUS
    }
}
