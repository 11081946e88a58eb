//! The `Zone` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Zone` kind.
pub static ZONE: ResourceSchema = ResourceSchema::new(
    "Zone",
    "Zone/",
    &[
        FieldDescriptor::boolean("active").with_display_name("Active?"),
        FieldDescriptor::link("contactlist", "ContactList").with_display_name("Contact List"),
        FieldDescriptor::integer("default_ttl").with_display_name("Default TTL"),
        FieldDescriptor::integer("expire").with_display_name("Expire"),
        FieldDescriptor::string("export_file").with_display_name("Export File"),
        FieldDescriptor::string("include").with_display_name("Include"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::integer("minimum").with_display_name("Minimum"),
        FieldDescriptor::string("mname").with_display_name("Server Name"),
        FieldDescriptor::string("name").with_display_name("Domain Name"),
        FieldDescriptor::integer("refresh").with_display_name("Refresh"),
        FieldDescriptor::integer("retry").with_display_name("Retry"),
        FieldDescriptor::string("rname").with_display_name("Mail Box"),
        FieldDescriptor::integer("serial").with_display_name("Serial"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "name",
            "mname",
            "rname",
            "serial",
            "refresh",
            "retry",
            "expire",
            "minimum",
            "contactlist",
            "active",
            "export_file",
            "default_ttl",
            "include",
            "info",
        ],
    ),
    View::new("brief", &["name"]),
])
.with_label(&["name"], " ")
.with_collections(&[
    Collection::new("records", "RR", "zone"),
    Collection::new("subnets", "SubnetZone", "zone"),
    Collection::new("aliases", "ZoneAlias", "zone"),
]);

/// A DNS zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zone;

impl NetdotResource for Zone {
    fn schema() -> &'static ResourceSchema {
        &ZONE
    }
}
