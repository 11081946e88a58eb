//! The `ASN` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `ASN` kind.
pub static ASN: ResourceSchema = ResourceSchema::new(
    "ASN",
    "ASN/",
    &[
        FieldDescriptor::string("description").with_display_name("Description"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::integer("number").with_display_name("Number"),
        FieldDescriptor::string("rir").with_display_name("RIR"),
    ],
)
.with_views(&[
    View::new("all", &["number", "rir", "description", "info"]),
    View::new("brief", &["number", "rir", "description"]),
])
.with_label(&["number"], " ")
.with_collections(&[
    Collection::new("devices", "Device", "bgplocalas"),
    Collection::new("ipblocks", "Ipblock", "asn"),
]);

/// An autonomous system number and the registry it was obtained from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Asn;

impl NetdotResource for Asn {
    fn schema() -> &'static ResourceSchema {
        &ASN
    }
}
