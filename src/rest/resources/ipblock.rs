//! The `Ipblock` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Ipblock` kind.
pub static IPBLOCK: ResourceSchema = ResourceSchema::new(
    "Ipblock",
    "Ipblock/",
    &[
        FieldDescriptor::string("address").with_display_name("Address"),
        FieldDescriptor::link("asn", "ASN").with_display_name("ASN"),
        FieldDescriptor::string("description").with_display_name("Description"),
        FieldDescriptor::datetime("first_seen").with_display_name("First Seen"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::link("interface", "Interface").with_display_name("Interface"),
        FieldDescriptor::datetime("last_seen").with_display_name("Last Seen"),
        FieldDescriptor::boolean("monitored").with_display_name("Monitored?"),
        FieldDescriptor::link("owner", "Entity").with_display_name("Owner"),
        FieldDescriptor::link("parent", "Ipblock").with_display_name("Parent"),
        FieldDescriptor::integer("prefix").with_display_name("Prefix Length"),
        FieldDescriptor::string("rir").with_display_name("RIR"),
        FieldDescriptor::link("status", "IpblockStatus").with_display_name("Status"),
        FieldDescriptor::boolean("use_network_broadcast")
            .with_display_name("Use Network/Broadcast?"),
        FieldDescriptor::link("used_by", "Entity").with_display_name("Used by"),
        FieldDescriptor::integer("version").with_display_name("Version(4/6)"),
        FieldDescriptor::link("vlan", "Vlan").with_display_name("Vlan"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "address",
            "prefix",
            "version",
            "parent",
            "interface",
            "vlan",
            "status",
            "monitored",
            "owner",
            "used_by",
            "rir",
            "asn",
            "description",
            "first_seen",
            "last_seen",
            "use_network_broadcast",
            "info",
        ],
    ),
    View::new("address_brief", &["address", "status", "used_by", "description", "last_seen"]),
    View::new("brief", &["address", "prefix", "status", "used_by", "description", "last_seen"]),
    View::new(
        "container_brief",
        &[
            "address",
            "prefix",
            "status",
            "owner",
            "used_by",
            "rir",
            "asn",
            "description",
        ],
    ),
    View::new("subnet_brief", &["address", "prefix", "status", "vlan", "used_by", "description"]),
])
.with_label(&["address", "prefix"], "/")
.with_collections(&[
    Collection::new("arp_entries", "ArpCacheEntry", "ipaddr"),
    Collection::new("snmp_devices", "Device", "snmp_target"),
    Collection::new("dhcp_scopes", "DhcpScope", "ipblock"),
    Collection::new("services", "IpService", "ip"),
    Collection::new("children", "Ipblock", "parent"),
    Collection::new("attributes", "IpblockAttr", "ipblock"),
    Collection::new("a_records", "RRADDR", "ipblock"),
    Collection::new("ptr_records", "RRPTR", "ipblock"),
    Collection::new("sites", "SiteSubnet", "subnet"),
    Collection::new("zones", "SubnetZone", "subnet"),
]);

/// An IPv4 or IPv6 CIDR block: a single address, a subnet or a container.
///
/// Labelled `<address>/<prefix>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ipblock;

impl NetdotResource for Ipblock {
    fn schema() -> &'static ResourceSchema {
        &IPBLOCK
    }
}
