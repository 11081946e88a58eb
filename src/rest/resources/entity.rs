//! The `Entity` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Entity` kind.
pub static ENTITY: ResourceSchema = ResourceSchema::new(
    "Entity",
    "Entity/",
    &[
        FieldDescriptor::string("acctnumber").with_display_name("Account Number"),
        FieldDescriptor::string("aliases").with_display_name("Aliases"),
        FieldDescriptor::string("asname").with_display_name("AS Name"),
        FieldDescriptor::integer("asnumber").with_display_name("AS Number"),
        FieldDescriptor::link("availability", "Availability").with_display_name("Availability"),
        FieldDescriptor::string("config_type").with_display_name("Config Type"),
        FieldDescriptor::link("contactlist", "ContactList").with_display_name("Contact List"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::string("maint_contract").with_display_name("Maintenance Contract"),
        FieldDescriptor::string("name").with_display_name("Name"),
        FieldDescriptor::string("oid").with_display_name("Enterprise OID"),
        FieldDescriptor::string("short_name").with_display_name("Short Name"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "name",
            "aliases",
            "short_name",
            "availability",
            "contactlist",
            "acctnumber",
            "maint_contract",
            "asname",
            "asnumber",
            "oid",
            "config_type",
            "info",
        ],
    ),
    View::new("brief", &["name", "short_name"]),
    View::new(
        "manufacturer",
        &[
            "name",
            "aliases",
            "short_name",
            "contactlist",
            "oid",
            "config_type",
            "info",
        ],
    ),
    View::new(
        "peer",
        &[
            "name",
            "aliases",
            "short_name",
            "availability",
            "contactlist",
            "asname",
            "asnumber",
            "info",
        ],
    ),
    View::new(
        "provider",
        &[
            "name",
            "aliases",
            "short_name",
            "availability",
            "contactlist",
            "asname",
            "asnumber",
            "info",
        ],
    ),
])
.with_label(&["name"], " ")
.with_collections(&[
    Collection::new("bgppeers", "BGPPeering", "entity"),
    Collection::new("cables", "BackboneCable", "owner"),
    Collection::new("circuits", "Circuit", "vendor"),
    Collection::new("links", "SiteLink", "entity"),
    Collection::new("owned_devices", "Device", "owner"),
    Collection::new("used_devices", "Device", "used_by"),
    Collection::new("roles", "EntityRole", "entity"),
    Collection::new("sites", "EntitySite", "entity"),
    Collection::new("owned_blocks", "Ipblock", "owner"),
    Collection::new("used_blocks", "Ipblock", "used_by"),
    Collection::new("maintenance_contracts", "MaintContract", "provider"),
    Collection::new("employees", "Person", "entity"),
    Collection::new("products", "Product", "manufacturer"),
]);

/// The `Entity` kind: an organization related to the network (vendor,
/// provider, customer, peer).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetdotEntity;

impl NetdotResource for NetdotEntity {
    fn schema() -> &'static ResourceSchema {
        &ENTITY
    }
}
