//! The `PhysAddr` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `PhysAddr` kind.
pub static PHYS_ADDR: ResourceSchema = ResourceSchema::new(
    "PhysAddr",
    "PhysAddr/",
    &[
        FieldDescriptor::string("address").with_display_name("Address"),
        FieldDescriptor::datetime("first_seen").with_display_name("First Seen"),
        FieldDescriptor::datetime("last_seen").with_display_name("Last Seen"),
        FieldDescriptor::boolean("static").with_display_name("Static?"),
    ],
)
.with_views(&[
    View::new("all", &["address", "static", "first_seen", "last_seen"]),
    View::new("brief", &["address", "static", "first_seen", "last_seen"]),
])
.with_label(&["address"], " ")
.with_collections(&[
    Collection::new("arp_entries", "ArpCacheEntry", "physaddr"),
    Collection::new("assets", "Asset", "physaddr"),
    Collection::new("dhcp_hosts", "DhcpScope", "physaddr"),
    Collection::new("fwt_entries", "FWTableEntry", "physaddr"),
    Collection::new("interfaces", "Interface", "physaddr"),
    Collection::new("attributes", "PhysAddrAttr", "physaddr"),
]);

/// A physical (MAC) address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhysAddr;

impl NetdotResource for PhysAddr {
    fn schema() -> &'static ResourceSchema {
        &PHYS_ADDR
    }
}
