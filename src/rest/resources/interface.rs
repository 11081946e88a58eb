//! The `Interface` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Interface` kind.
pub static INTERFACE: ResourceSchema = ResourceSchema::new(
    "Interface",
    "Interface/",
    &[
        FieldDescriptor::string("admin_duplex").with_display_name("Admin Duplex"),
        FieldDescriptor::string("admin_status").with_display_name("Admin Status"),
        FieldDescriptor::boolean("auto_dns").with_display_name("Auto DNS?"),
        FieldDescriptor::boolean("bpdu_filter_enabled").with_display_name("BPDU Filter?"),
        FieldDescriptor::boolean("bpdu_guard_enabled").with_display_name("BPDU Guard?"),
        FieldDescriptor::link("circuit", "Circuit").with_display_name("Circuit"),
        FieldDescriptor::link("contactlist", "ContactList").with_display_name("Contact List"),
        FieldDescriptor::string("description").with_display_name("Description"),
        FieldDescriptor::link("device", "Device").with_display_name("Device"),
        FieldDescriptor::string("dlci").with_display_name("DLCI"),
        FieldDescriptor::string("doc_status").with_display_name("Doc Status"),
        FieldDescriptor::date("down_from").with_display_name("Down From"),
        FieldDescriptor::date("down_until").with_display_name("Down Until"),
        FieldDescriptor::string("dp_remote_id").with_display_name("DP Remote ID"),
        FieldDescriptor::string("dp_remote_ip").with_display_name("DP Remote IP"),
        FieldDescriptor::string("dp_remote_port").with_display_name("DP Remote Port"),
        FieldDescriptor::string("dp_remote_type").with_display_name("DP Remote Type"),
        FieldDescriptor::boolean("ignore_ip").with_display_name("Ignore IP?"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::link("jack", "HorizontalCable").with_display_name("Jack"),
        FieldDescriptor::string("jack_char").with_display_name("Jack(char)"),
        FieldDescriptor::boolean("loop_guard_enabled").with_display_name("Loop Guard?"),
        FieldDescriptor::boolean("monitored").with_display_name("Monitored?"),
        FieldDescriptor::link("monitorstatus", "MonitorStatus")
            .with_display_name("Monitored Status"),
        FieldDescriptor::string("name").with_display_name("Name"),
        FieldDescriptor::link("neighbor", "Interface").with_display_name("Neighbor"),
        FieldDescriptor::boolean("neighbor_fixed").with_display_name("Neighbor Fixed?"),
        FieldDescriptor::integer("neighbor_missed").with_display_name("Neighbor Missed"),
        FieldDescriptor::string("number").with_display_name("Number"),
        FieldDescriptor::string("oper_duplex").with_display_name("Oper Duplex"),
        FieldDescriptor::string("oper_status").with_display_name("Oper Status"),
        FieldDescriptor::boolean("overwrite_descr").with_display_name("Overwrite Description?"),
        FieldDescriptor::link("physaddr", "PhysAddr").with_display_name("Physical (MAC) Address"),
        FieldDescriptor::string("room_char").with_display_name("Room(char)"),
        FieldDescriptor::boolean("root_guard_enabled").with_display_name("Root Guard?"),
        FieldDescriptor::boolean("snmp_managed").with_display_name("SNMP-Managed?"),
        FieldDescriptor::integer("speed").with_display_name("Speed"),
        FieldDescriptor::string("stp_id").with_display_name("STP Port ID"),
        FieldDescriptor::string("type").with_display_name("Type"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "number",
            "name",
            "device",
            "doc_status",
            "jack",
            "jack_char",
            "room_char",
            "circuit",
            "dlci",
            "description",
            "overwrite_descr",
            "type",
            "speed",
            "admin_duplex",
            "oper_duplex",
            "admin_status",
            "auto_dns",
            "oper_status",
            "monitored",
            "monitorstatus",
            "snmp_managed",
            "physaddr",
            "neighbor",
            "neighbor_fixed",
            "neighbor_missed",
            "stp_id",
            "bpdu_filter_enabled",
            "bpdu_guard_enabled",
            "loop_guard_enabled",
            "root_guard_enabled",
            "ignore_ip",
            "dp_remote_id",
            "dp_remote_ip",
            "dp_remote_port",
            "dp_remote_type",
            "down_from",
            "down_until",
            "contactlist",
            "info",
        ],
    ),
    View::new("brief", &["number", "name", "device", "jack", "description", "neighbor"]),
])
.with_label(&["name", "device"], " ")
.with_collections(&[
    Collection::new("arp_entries", "ArpCacheEntry", "interface"),
    Collection::new("fwt_entries", "FWTableEntry", "interface"),
    Collection::new("neighbors", "Interface", "neighbor"),
    Collection::new("vlans", "InterfaceVlan", "interface"),
    Collection::new("ips", "Ipblock", "interface"),
]);

/// A device interface. Labelled by interface name and device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interface;

impl NetdotResource for Interface {
    fn schema() -> &'static ResourceSchema {
        &INTERFACE
    }
}
