//! Static per-kind resource metadata.
//!
//! A [`ResourceSchema`] is plain `'static` data: the wire path, the id
//! attribute, the ordered field descriptors, named views and the pieces
//! needed to compose a label. Every [`Entity`](crate::rest::Entity) holds a
//! reference to the schema of its kind and consults it for every operation.
//!
//! # Example
//!
//! ```rust
//! use netdot_api::rest::{Collection, FieldDescriptor, ResourceSchema, View};
//!
//! static VLAN: ResourceSchema = ResourceSchema::new(
//!     "Vlan",
//!     "Vlan/",
//!     &[
//!         FieldDescriptor::integer("vid").with_display_name("VLAN ID"),
//!         FieldDescriptor::string("name").with_display_name("Name"),
//!     ],
//! )
//! .with_views(&[View::new("brief", &["vid"])])
//! .with_label(&["vid"], " ")
//! .with_collections(&[Collection::new("subnets", "Ipblock", "vlan")]);
//!
//! assert_eq!(VLAN.field("vid").unwrap().display_name(), "VLAN ID");
//! assert_eq!(VLAN.view_fields("brief").unwrap().len(), 1);
//! ```

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::rest::FieldDescriptor;

/// Name of the view that lists every field when not defined explicitly.
pub const ALL_VIEW: &str = "all";

/// Builds a label from the rendered label fields, in declaration order.
pub type LabelFn = fn(&[String]) -> String;

/// Rewrites the serialized parameters of a save request in place.
pub type PreSaveHook = fn(&mut BTreeMap<String, String>);

/// A named, ordered subset of fields used for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct View {
    /// The view name.
    pub name: &'static str,
    /// Field names, in display order.
    pub fields: &'static [&'static str],
}

impl View {
    /// Creates a view.
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [&'static str]) -> Self {
        Self { name, fields }
    }
}

/// A reverse relation: entities of `target` whose `field` links back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Collection {
    /// The collection name (e.g. `interfaces` on `Device`).
    pub name: &'static str,
    /// The kind of the related entities.
    pub target: &'static str,
    /// The link field of `target` referencing the owner.
    pub field: &'static str,
}

impl Collection {
    /// Creates a collection.
    #[must_use]
    pub const fn new(name: &'static str, target: &'static str, field: &'static str) -> Self {
        Self {
            name,
            target,
            field,
        }
    }
}

/// Metadata describing one resource kind.
#[derive(Clone, Copy, Debug)]
pub struct ResourceSchema {
    /// The kind name (e.g. `Ipblock`).
    pub name: &'static str,
    /// The collection path relative to `rest/`, with a trailing slash.
    pub resource: &'static str,
    /// The attribute carrying the id.
    pub id_field: &'static str,
    /// Field descriptors, in declaration order.
    pub fields: &'static [FieldDescriptor],
    /// Named views.
    pub views: &'static [View],
    /// Fields composing the label.
    pub label_fields: &'static [&'static str],
    /// Separator placed between label fields.
    pub label_separator: &'static str,
    /// Overrides label composition.
    pub label_with: Option<LabelFn>,
    /// Rewrites save parameters before they are posted.
    pub pre_save: Option<PreSaveHook>,
    /// Reverse relations.
    pub collections: &'static [Collection],
}

impl ResourceSchema {
    /// Creates a schema with an `id` id-field, no views and an empty label.
    #[must_use]
    pub const fn new(
        name: &'static str,
        resource: &'static str,
        fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            name,
            resource,
            id_field: "id",
            fields,
            views: &[],
            label_fields: &[],
            label_separator: " ",
            label_with: None,
            pre_save: None,
            collections: &[],
        }
    }

    /// Sets the id attribute.
    #[must_use]
    pub const fn with_id_field(mut self, id_field: &'static str) -> Self {
        self.id_field = id_field;
        self
    }

    /// Sets the named views.
    #[must_use]
    pub const fn with_views(mut self, views: &'static [View]) -> Self {
        self.views = views;
        self
    }

    /// Sets the label fields and their separator.
    #[must_use]
    pub const fn with_label(
        mut self,
        fields: &'static [&'static str],
        separator: &'static str,
    ) -> Self {
        self.label_fields = fields;
        self.label_separator = separator;
        self
    }

    /// Replaces the default label composition.
    #[must_use]
    pub const fn with_label_fn(mut self, label: LabelFn) -> Self {
        self.label_with = Some(label);
        self
    }

    /// Installs a pre-save hook.
    #[must_use]
    pub const fn with_pre_save(mut self, hook: PreSaveHook) -> Self {
        self.pre_save = Some(hook);
        self
    }

    /// Sets the reverse relations.
    #[must_use]
    pub const fn with_collections(mut self, collections: &'static [Collection]) -> Self {
        self.collections = collections;
        self
    }

    /// Returns the descriptor of a field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns the descriptor of a field, or a configuration error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownField`] if the kind has no such field.
    pub fn require_field(&self, name: &str) -> Result<&'static FieldDescriptor, ConfigError> {
        self.field(name).ok_or_else(|| ConfigError::UnknownField {
            resource: self.name.to_string(),
            field: name.to_string(),
        })
    }

    /// Returns an explicitly defined view.
    #[must_use]
    pub fn view(&self, name: &str) -> Option<&'static View> {
        self.views.iter().find(|view| view.name == name)
    }

    /// Returns the field names of a view.
    ///
    /// The `all` view lists every field, in declaration order, unless the
    /// kind defines it explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UndefinedView`] for any other unknown view.
    pub fn view_fields(&self, name: &str) -> Result<Vec<&'static str>, ConfigError> {
        match self.view(name) {
            Some(view) if !view.fields.is_empty() => Ok(view.fields.to_vec()),
            _ if name == ALL_VIEW => Ok(self.fields.iter().map(|field| field.name).collect()),
            _ => Err(ConfigError::UndefinedView {
                resource: self.name.to_string(),
                view: name.to_string(),
            }),
        }
    }

    /// Returns a reverse relation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UndefinedCollection`] if the kind has none by
    /// that name.
    pub fn collection(&self, name: &str) -> Result<&'static Collection, ConfigError> {
        self.collections
            .iter()
            .find(|collection| collection.name == name)
            .ok_or_else(|| ConfigError::UndefinedCollection {
                resource: self.name.to_string(),
                collection: name.to_string(),
            })
    }

    /// Composes a label from the rendered label fields.
    #[must_use]
    pub fn compose_label(&self, parts: &[String]) -> String {
        if let Some(label) = self.label_with {
            return label(parts);
        }
        parts.join(self.label_separator).trim().to_string()
    }

    /// Returns the collection path (e.g. `Device/`).
    #[must_use]
    pub const fn collection_path(&self) -> &'static str {
        self.resource
    }

    /// Returns the path of one instance (e.g. `Device/12`).
    #[must_use]
    pub fn instance_path(&self, id: u64) -> String {
        format!("{}{id}", self.resource)
    }

    /// Checks that the schema is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty kind name or resource path, a
    /// field without a name, or a view or label referencing an unknown field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::IncompleteSchema { what: "name" });
        }
        if self.resource.is_empty() {
            return Err(ConfigError::IncompleteSchema { what: "resource path" });
        }
        if self.id_field.is_empty() {
            return Err(ConfigError::IncompleteSchema { what: "id field" });
        }
        if self.fields.iter().any(|field| field.name.is_empty()) {
            return Err(ConfigError::EmptyFieldName {
                resource: self.name,
            });
        }

        let referenced = self
            .views
            .iter()
            .flat_map(|view| view.fields.iter())
            .chain(self.label_fields.iter());
        for name in referenced {
            self.require_field(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ZONE: ResourceSchema = ResourceSchema::new(
        "Zone",
        "Zone/",
        &[
            FieldDescriptor::string("name").with_display_name("Domain Name"),
            FieldDescriptor::integer("serial"),
            FieldDescriptor::boolean("active"),
        ],
    )
    .with_views(&[View::new("brief", &["name"])])
    .with_label(&["name"], " ")
    .with_collections(&[Collection::new("records", "RR", "zone")]);

    #[test]
    fn test_field_lookup() {
        assert_eq!(ZONE.field("serial").unwrap().name, "serial");
        assert!(ZONE.field("missing").is_none());
        assert!(matches!(
            ZONE.require_field("missing"),
            Err(ConfigError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_all_view_falls_back_to_every_field() {
        assert_eq!(
            ZONE.view_fields("all").unwrap(),
            vec!["name", "serial", "active"]
        );
        assert_eq!(ZONE.view_fields("brief").unwrap(), vec!["name"]);
    }

    #[test]
    fn test_unknown_view_is_an_error() {
        assert_eq!(
            ZONE.view_fields("fancy"),
            Err(ConfigError::UndefinedView {
                resource: "Zone".to_string(),
                view: "fancy".to_string(),
            })
        );
    }

    #[test]
    fn test_paths() {
        assert_eq!(ZONE.collection_path(), "Zone/");
        assert_eq!(ZONE.instance_path(42), "Zone/42");
    }

    #[test]
    fn test_label_composition() {
        let parts = ["example.org".to_string()];
        assert_eq!(ZONE.compose_label(&parts), "example.org");

        let ipblock = ResourceSchema::new("Ipblock", "Ipblock/", &[]).with_label(&[], "/");
        assert_eq!(
            ipblock.compose_label(&["10.0.0.0".to_string(), "8".to_string()]),
            "10.0.0.0/8"
        );

        let custom = ResourceSchema::new("Custom", "Custom/", &[])
            .with_label_fn(|parts| format!("<{}>", parts.concat()));
        assert_eq!(custom.compose_label(&["a".to_string()]), "<a>");
    }

    #[test]
    fn test_label_with_empty_parts_is_trimmed() {
        let site = ResourceSchema::new("Site", "Site/", &[]).with_label(&[], " ");
        assert_eq!(
            site.compose_label(&["Main".to_string(), String::new()]),
            "Main"
        );
    }

    #[test]
    fn test_collection_lookup() {
        let records = ZONE.collection("records").unwrap();
        assert_eq!(records.target, "RR");
        assert_eq!(records.field, "zone");
        assert!(matches!(
            ZONE.collection("subnets"),
            Err(ConfigError::UndefinedCollection { .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert!(ZONE.validate().is_ok());

        static NAMELESS: ResourceSchema =
            ResourceSchema::new("Broken", "Broken/", &[FieldDescriptor::string("")]);
        assert_eq!(
            NAMELESS.validate(),
            Err(ConfigError::EmptyFieldName { resource: "Broken" })
        );

        static BAD_VIEW: ResourceSchema =
            ResourceSchema::new("Broken", "Broken/", &[FieldDescriptor::string("name")])
                .with_views(&[View::new("brief", &["nope"])]);
        assert!(matches!(
            BAD_VIEW.validate(),
            Err(ConfigError::UnknownField { .. })
        ));

        static NO_PATH: ResourceSchema = ResourceSchema::new("Broken", "", &[]);
        assert_eq!(
            NO_PATH.validate(),
            Err(ConfigError::IncompleteSchema {
                what: "resource path"
            })
        );
    }
}
