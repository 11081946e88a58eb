//! The `Device` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Device` kind.
pub static DEVICE: ResourceSchema = ResourceSchema::new(
    "Device",
    "Device/",
    &[
        FieldDescriptor::string("aliases").with_display_name("Aliases"),
        FieldDescriptor::link("asset_id", "Asset").with_display_name("Asset"),
        FieldDescriptor::boolean("auto_dns").with_display_name("Auto DNS?"),
        FieldDescriptor::string("bgpid").with_display_name("BGP ID"),
        FieldDescriptor::link("bgplocalas", "ASN").with_display_name("BGP Local AS"),
        FieldDescriptor::boolean("canautoupdate").with_display_name("Auto Update?"),
        FieldDescriptor::boolean("collect_arp").with_display_name("Collect ARP?"),
        FieldDescriptor::boolean("collect_fwt").with_display_name("Collect FWT?"),
        FieldDescriptor::boolean("collect_stp").with_display_name("Collect STP Info?"),
        FieldDescriptor::string("community").with_display_name("SNMP Community"),
        FieldDescriptor::boolean("customer_managed").with_display_name("Managed by Customer?"),
        FieldDescriptor::datetime("date_installed").with_display_name("First Discovered"),
        FieldDescriptor::date("down_from").with_display_name("Down From"),
        FieldDescriptor::date("down_until").with_display_name("Down Until"),
        FieldDescriptor::integer("extension").with_display_name("Extension"),
        FieldDescriptor::link("host_device", "Device").with_display_name("Host Device"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::boolean("ipforwarding").with_display_name("IP Forward?"),
        FieldDescriptor::datetime("last_arp").with_display_name("Last ARP"),
        FieldDescriptor::datetime("last_fwt").with_display_name("Last FWT"),
        FieldDescriptor::datetime("last_updated").with_display_name("Last Updated"),
        FieldDescriptor::string("layers").with_display_name("OSI Layers"),
        FieldDescriptor::boolean("monitor_config").with_display_name("Monitor Config?"),
        FieldDescriptor::string("monitor_config_group").with_display_name("Config Group"),
        FieldDescriptor::boolean("monitored").with_display_name("Monitored?"),
        FieldDescriptor::integer("monitoring_path_cost").with_display_name("Path Cost"),
        FieldDescriptor::string("monitoring_template").with_display_name("Monitoring Template"),
        FieldDescriptor::link("monitorstatus", "MonitorStatus")
            .with_display_name("Monitored Status"),
        FieldDescriptor::link("name", "RR").with_display_name("Name"),
        FieldDescriptor::string("oobname").with_display_name("OOB Hostname #1"),
        FieldDescriptor::string("oobname_2").with_display_name("OOB Hostname #2"),
        FieldDescriptor::string("oobnumber").with_display_name("OOB Tel #1"),
        FieldDescriptor::string("oobnumber_2").with_display_name("OOB Tel #2"),
        FieldDescriptor::string("os").with_display_name("OS"),
        FieldDescriptor::link("owner", "Entity").with_display_name("Owner"),
        FieldDescriptor::string("power_outlet").with_display_name("Power #1"),
        FieldDescriptor::string("power_outlet_2").with_display_name("Power #2"),
        FieldDescriptor::string("rack").with_display_name("Rack"),
        FieldDescriptor::link("room", "Room").with_display_name("Room"),
        FieldDescriptor::link("site", "Site").with_display_name("Site"),
        FieldDescriptor::string("snmp_authkey").with_display_name("AuthKey"),
        FieldDescriptor::string("snmp_authprotocol").with_display_name("AuthProtocol"),
        FieldDescriptor::boolean("snmp_bulk").with_display_name("SNMP Bulk?"),
        FieldDescriptor::integer("snmp_conn_attempts").with_display_name("SNMP Failed Attempts"),
        FieldDescriptor::boolean("snmp_down").with_display_name("SNMP Down"),
        FieldDescriptor::boolean("snmp_managed").with_display_name("SNMP Managed?"),
        FieldDescriptor::boolean("snmp_polling").with_display_name("SNMP Polling?"),
        FieldDescriptor::string("snmp_privkey").with_display_name("PrivKey"),
        FieldDescriptor::string("snmp_privprotocol").with_display_name("PrivProtocol"),
        FieldDescriptor::string("snmp_securitylevel").with_display_name("SecLevel"),
        FieldDescriptor::string("snmp_securityname").with_display_name("SecName"),
        FieldDescriptor::link("snmp_target", "Ipblock").with_display_name("SNMP Target Address"),
        FieldDescriptor::integer("snmp_version").with_display_name("SNMP Version"),
        FieldDescriptor::boolean("stp_enabled").with_display_name("STP Enabled?"),
        FieldDescriptor::string("stp_mst_digest").with_display_name("MST Config Digest"),
        FieldDescriptor::string("stp_mst_region").with_display_name("MST Region"),
        FieldDescriptor::integer("stp_mst_rev").with_display_name("MST Revision"),
        FieldDescriptor::string("stp_type").with_display_name("STP Type"),
        FieldDescriptor::string("sysdescription").with_display_name("System Description"),
        FieldDescriptor::string("syslocation").with_display_name("System Location"),
        FieldDescriptor::string("sysname").with_display_name("System Name"),
        FieldDescriptor::link("used_by", "Entity").with_display_name("Used by"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "name",
            "asset_id",
            "aliases",
            "snmp_target",
            "sysname",
            "sysdescription",
            "syslocation",
            "ipforwarding",
            "layers",
            "os",
            "host_device",
            "extension",
            "bgplocalas",
            "auto_dns",
            "bgpid",
            "oobname",
            "oobname_2",
            "oobnumber",
            "oobnumber_2",
            "power_outlet",
            "power_outlet_2",
            "owner",
            "used_by",
            "monitored",
            "monitoring_path_cost",
            "monitoring_template",
            "monitorstatus",
            "customer_managed",
            "community",
            "canautoupdate",
            "site",
            "monitor_config",
            "monitor_config_group",
            "snmp_managed",
            "snmp_polling",
            "collect_arp",
            "last_arp",
            "collect_fwt",
            "collect_stp",
            "last_fwt",
            "snmp_bulk",
            "snmp_version",
            "snmp_securityname",
            "snmp_authkey",
            "snmp_authprotocol",
            "snmp_privkey",
            "snmp_privprotocol",
            "snmp_securitylevel",
            "snmp_conn_attempts",
            "snmp_down",
            "stp_enabled",
            "stp_type",
            "stp_mst_region",
            "stp_mst_rev",
            "stp_mst_digest",
            "room",
            "rack",
            "last_updated",
            "date_installed",
            "down_from",
            "down_until",
            "info",
        ],
    ),
    View::new("brief", &["name", "asset_id", "site", "snmp_target"]),
])
.with_label(&["name"], " ")
.with_collections(&[
    Collection::new("arp_caches", "ArpCache", "device"),
    Collection::new("bgppeers", "BGPPeering", "device"),
    Collection::new("hosted_devices", "Device", "host_device"),
    Collection::new("attributes", "DeviceAttr", "device"),
    Collection::new("modules", "DeviceModule", "device"),
    Collection::new("contacts", "DeviceContacts", "device"),
    Collection::new("forwarding_tables", "FWTable", "device"),
    Collection::new("interfaces", "Interface", "device"),
    Collection::new("stp_instances", "STPInstance", "device"),
]);

/// A managed network infrastructure device.
///
/// The `name` of a device is a link to its DNS owner record ([`Rr`](super::Rr)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Device;

impl NetdotResource for Device {
    fn schema() -> &'static ResourceSchema {
        &DEVICE
    }
}
