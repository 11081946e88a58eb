//! The `Site` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Site` kind.
pub static SITE: ResourceSchema = ResourceSchema::new(
    "Site",
    "Site/",
    &[
        FieldDescriptor::string("aliases").with_display_name("Aliases"),
        FieldDescriptor::link("availability", "Availability").with_display_name("Availability"),
        FieldDescriptor::string("city").with_display_name("City"),
        FieldDescriptor::link("contactlist", "ContactList").with_display_name("Contact List"),
        FieldDescriptor::string("country").with_display_name("Country"),
        FieldDescriptor::integer("gsf").with_display_name("GSF"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::string("name").with_display_name("Name"),
        FieldDescriptor::string("number").with_display_name("Site ID"),
        FieldDescriptor::string("pobox").with_display_name("P.O. Box"),
        FieldDescriptor::string("state").with_display_name("State"),
        FieldDescriptor::string("street1").with_display_name("Street (1)"),
        FieldDescriptor::string("street2").with_display_name("Street (2)"),
        FieldDescriptor::string("zip").with_display_name("Zip/Postal Code"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "name",
            "number",
            "gsf",
            "aliases",
            "street1",
            "street2",
            "pobox",
            "city",
            "state",
            "zip",
            "country",
            "availability",
            "contactlist",
            "info",
        ],
    ),
    View::new("brief", &["name", "number", "street1", "city"]),
])
.with_label(&["name", "aliases"], " ")
.with_collections(&[
    Collection::new("farlinks", "SiteLink", "farend"),
    Collection::new("nearlinks", "SiteLink", "nearend"),
    Collection::new("devices", "Device", "site"),
    Collection::new("entities", "EntitySite", "site"),
    Collection::new("floors", "Floor", "site"),
    Collection::new("people", "Person", "location"),
    Collection::new("subnets", "SiteSubnet", "site"),
]);

/// A physical location such as a building or data center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Site;

impl NetdotResource for Site {
    fn schema() -> &'static ResourceSchema {
        &SITE
    }
}
