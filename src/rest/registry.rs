//! Registry of resource schemas, keyed by kind name.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::ConfigError;
use crate::rest::resources;
use crate::rest::ResourceSchema;

/// The resource kinds a [`RestClient`](crate::RestClient) can decode.
///
/// Link fields name their target kind as a string; an unresolved entity is
/// resolved through the registry of the client it is resolved with, so a
/// link to a kind that is not registered stays unresolvable.
///
/// # Example
///
/// ```rust
/// use netdot_api::rest::{FieldDescriptor, ResourceSchema, SchemaRegistry};
///
/// static ROOM: ResourceSchema =
///     ResourceSchema::new("Room", "Room/", &[FieldDescriptor::string("name")])
///         .with_label(&["name"], " ");
///
/// let mut registry = SchemaRegistry::builtin();
/// registry.register(&ROOM).unwrap();
///
/// assert!(registry.get("Room").is_some());
/// assert!(registry.get("Device").is_some());
/// assert!(registry.register(&ROOM).is_err());
/// ```
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, &'static ResourceSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the bundled resource kinds.
    #[must_use]
    pub fn builtin() -> Self {
        let schemas = resources::BUILTIN
            .iter()
            .map(|schema| (schema.name, *schema))
            .collect();
        Self { schemas }
    }

    /// Registers a schema after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateResource`] if the kind is already
    /// registered, or the error of [`ResourceSchema::validate`].
    pub fn register(&mut self, schema: &'static ResourceSchema) -> Result<(), ConfigError> {
        schema.validate()?;
        if self.schemas.contains_key(schema.name) {
            return Err(ConfigError::DuplicateResource {
                name: schema.name.to_string(),
            });
        }
        self.schemas.insert(schema.name, schema);
        Ok(())
    }

    /// Returns the schema of a kind.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&'static ResourceSchema> {
        self.schemas.get(kind).copied()
    }

    /// Returns the schema of a kind, or a configuration error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownResource`] if the kind is not registered.
    pub fn schema(&self, kind: &str) -> Result<&'static ResourceSchema, ConfigError> {
        self.get(kind).ok_or_else(|| ConfigError::UnknownResource {
            name: kind.to_string(),
        })
    }

    /// Returns `true` if the kind is registered.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.schemas.contains_key(kind)
    }

    /// Returns the registered kind names, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemas.keys().copied()
    }

    /// Returns the number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns `true` if no kind is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{FieldDescriptor, View};

    #[test]
    fn test_builtin_kinds() {
        let registry = SchemaRegistry::builtin();
        let kinds: Vec<_> = registry.kinds().collect();
        assert_eq!(
            kinds,
            vec![
                "ASN",
                "Device",
                "Entity",
                "Interface",
                "Ipblock",
                "IpblockStatus",
                "PhysAddr",
                "Product",
                "RR",
                "RRADDR",
                "Site",
                "Vlan",
                "Zone",
            ]
        );
    }

    #[test]
    fn test_builtin_schemas_are_valid() {
        for schema in resources::BUILTIN {
            assert_eq!(schema.validate(), Ok(()), "{} is invalid", schema.name);
            assert_eq!(schema.resource, format!("{}/", schema.name));
        }
    }

    #[test]
    fn test_register_rejects_duplicates() {
        static VLAN_AGAIN: ResourceSchema = ResourceSchema::new("Vlan", "Vlan/", &[]);
        let mut registry = SchemaRegistry::builtin();
        assert_eq!(
            registry.register(&VLAN_AGAIN),
            Err(ConfigError::DuplicateResource {
                name: "Vlan".to_string()
            })
        );
    }

    #[test]
    fn test_register_rejects_invalid_schemas() {
        static NAMELESS_FIELD: ResourceSchema =
            ResourceSchema::new("Room", "Room/", &[FieldDescriptor::string("")]);
        static BAD_LABEL: ResourceSchema =
            ResourceSchema::new("Floor", "Floor/", &[FieldDescriptor::string("level")])
                .with_label(&["name"], " ");
        static BAD_VIEW: ResourceSchema =
            ResourceSchema::new("Closet", "Closet/", &[FieldDescriptor::string("name")])
                .with_views(&[View::new("brief", &["name", "floor"])]);

        let mut registry = SchemaRegistry::new();
        assert!(matches!(
            registry.register(&NAMELESS_FIELD),
            Err(ConfigError::EmptyFieldName { resource: "Room" })
        ));
        assert!(matches!(
            registry.register(&BAD_LABEL),
            Err(ConfigError::UnknownField { .. })
        ));
        assert!(matches!(
            registry.register(&BAD_VIEW),
            Err(ConfigError::UnknownField { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_kind() {
        let registry = SchemaRegistry::builtin();
        assert!(registry.get("Asset").is_none());
        assert!(!registry.contains("Asset"));
        assert_eq!(
            registry.schema("Asset").unwrap_err(),
            ConfigError::UnknownResource {
                name: "Asset".to_string()
            }
        );
    }

    #[test]
    fn test_debug_lists_kinds() {
        let mut registry = SchemaRegistry::new();
        static ROOM: ResourceSchema = ResourceSchema::new("Room", "Room/", &[]);
        registry.register(&ROOM).unwrap();
        assert_eq!(format!("{registry:?}"), r#"{"Room"}"#);
        assert_eq!(registry.len(), 1);
    }
}
