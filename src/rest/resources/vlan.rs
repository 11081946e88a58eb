//! The `Vlan` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Vlan` kind.
pub static VLAN: ResourceSchema = ResourceSchema::new(
    "Vlan",
    "Vlan/",
    &[
        FieldDescriptor::string("description").with_display_name("Description"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::string("name").with_display_name("Name"),
        FieldDescriptor::integer("vid").with_display_name("VLAN ID"),
        FieldDescriptor::link("vlangroup", "VlanGroup").with_display_name("Group"),
    ],
)
.with_views(&[
    View::new("all", &["vid", "name", "vlangroup", "description", "info"]),
    View::new("brief", &["vid", "name", "description"]),
])
.with_label(&["vid"], " ")
.with_collections(&[
    Collection::new("interfaces", "InterfaceVlan", "vlan"),
    Collection::new("subnets", "Ipblock", "vlan"),
]);

/// A virtual LAN, labelled by its VLAN id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Vlan;

impl NetdotResource for Vlan {
    fn schema() -> &'static ResourceSchema {
        &VLAN
    }
}
