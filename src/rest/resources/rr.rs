//! The `RR` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `RR` kind.
pub static RR: ResourceSchema = ResourceSchema::new(
    "RR",
    "RR/",
    &[
        FieldDescriptor::boolean("active").with_display_name("Active?"),
        FieldDescriptor::boolean("auto_update").with_display_name("Auto Update?"),
        FieldDescriptor::datetime("created").with_display_name("Created"),
        FieldDescriptor::date("expiration").with_display_name("Expiration Date"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::datetime("modified").with_display_name("Modified"),
        FieldDescriptor::string("name").with_display_name("Name"),
        FieldDescriptor::link("zone", "Zone").with_display_name("Zone"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "name",
            "zone",
            "active",
            "auto_update",
            "created",
            "modified",
            "expiration",
            "info",
        ],
    ),
    View::new("brief", &["name", "zone"]),
])
.with_label(&["name", "zone"], ".")
.with_collections(&[
    Collection::new("devices", "Device", "name"),
    Collection::new("a_records", "RRADDR", "rr"),
    Collection::new("cnames", "RRCNAME", "rr"),
    Collection::new("ds_records", "RRDS", "rr"),
    Collection::new("hinfo_records", "RRHINFO", "rr"),
    Collection::new("loc_records", "RRLOC", "rr"),
    Collection::new("mx_records", "RRMX", "rr"),
    Collection::new("naptr_records", "RRNAPTR", "rr"),
    Collection::new("ns_records", "RRNS", "rr"),
    Collection::new("ptr_records", "RRPTR", "rr"),
    Collection::new("srv_records", "RRSRV", "rr"),
    Collection::new("txt_records", "RRTXT", "rr"),
]);

/// A DNS owner record, grouping every record with the same name.
///
/// Labelled `<name>.<zone>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rr;

impl NetdotResource for Rr {
    fn schema() -> &'static ResourceSchema {
        &RR
    }
}
