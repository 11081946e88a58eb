//! The `Product` resource kind.

use crate::rest::{Collection, FieldDescriptor, NetdotResource, ResourceSchema, View};

/// Schema of the `Product` kind.
pub static PRODUCT: ResourceSchema = ResourceSchema::new(
    "Product",
    "Product/",
    &[
        FieldDescriptor::string("config_type").with_display_name("Config Type"),
        FieldDescriptor::string("description").with_display_name("Description"),
        FieldDescriptor::string("info").with_display_name("Comments"),
        FieldDescriptor::string("latest_os").with_display_name("Recommended OS"),
        FieldDescriptor::link("manufacturer", "Entity").with_display_name("Manufacturer"),
        FieldDescriptor::string("name").with_display_name("Name"),
        FieldDescriptor::string("part_number").with_display_name("Part Number"),
        FieldDescriptor::string("sysobjectid").with_display_name("System ID"),
        FieldDescriptor::link("type", "ProductType").with_display_name("Type"),
    ],
)
.with_views(&[
    View::new(
        "all",
        &[
            "name",
            "type",
            "description",
            "sysobjectid",
            "manufacturer",
            "config_type",
            "part_number",
            "latest_os",
            "info",
        ],
    ),
    View::new("brief", &["name", "type", "description", "manufacturer"]),
])
.with_label(&["manufacturer", "name"], " ")
.with_collections(&[
    Collection::new("assets", "Asset", "product_id"),
]);

/// A hardware product model, labelled by manufacturer and name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Product;

impl NetdotResource for Product {
    fn schema() -> &'static ResourceSchema {
        &PRODUCT
    }
}
