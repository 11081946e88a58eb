//! The generic Netdot object.
//!
//! An [`Entity`] is an instance of any resource kind, parameterized by the
//! kind's [`ResourceSchema`]. It is in one of two states:
//!
//! - **Unresolved**: only the kind and id are known. Link fields decode to
//!   unresolved entities, and so does `get(id)`.
//! - **Resolved**: every field has a typed value and the wire state of the
//!   last synchronization is captured for dirty tracking.
//!
//! Reading or writing a field of an unresolved entity fetches it first, so
//! every accessor takes the [`RestClient`] to fetch with. Entities never hold
//! a client themselves.
//!
//! ```text
//!   create() ──► NEW ──save()──► RESOLVED ◄──resolve()── UNRESOLVED ◄── get(id), links
//!                 ▲                 │ save() keeps it resolved
//!                 └────delete()─────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use netdot_api::rest::resources::Device;
//! use netdot_api::rest::NetdotResource;
//!
//! let mut device = Device::get(12);
//! println!("{}", device.get(&client, "sysname").await?);
//!
//! device.set(&client, "info", "moved to rack 4").await?;
//! assert_eq!(device.dirty_fields(), vec!["info"]);
//! device.save(&client).await?;
//!
//! // Follow a link; the site is fetched on first access.
//! if let Some(site) = device.link_mut(&client, "site").await? {
//!     println!("{}", site.get(&client, "city").await?);
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::clients::RestClient;
use crate::rest::decoder::{Attributes, XmlDocument};
use crate::rest::errors::ensure_success;
use crate::rest::path::{build_path, ResourceOperation};
use crate::rest::schema::ALL_VIEW;
use crate::rest::tracking::{FieldValues, StateSnapshot};
use crate::rest::{FieldError, ResourceError, ResourceSchema, SearchCriteria, Value};

/// Future returned by [`Entity::resolve_label`].
pub type LabelFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ResourceError>> + Send + 'a>>;

#[derive(Clone, Debug)]
struct Record {
    schema: &'static ResourceSchema,
    raw: Attributes,
    values: FieldValues,
    snapshot: StateSnapshot,
}

impl Record {
    /// Returns the label the server sent next to the xlink of `name`, as
    /// long as the link still points at the same id.
    fn wire_label(&self, name: &str, target: &Entity) -> Option<&str> {
        let id = target.id()?.to_string();
        let xlink = self.raw.get(&format!("{name}_xlink"))?;
        if xlink.rsplit('/').next().map(str::trim) != Some(id.as_str()) {
            return None;
        }
        self.raw
            .get(name)
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
    }

    fn render_local(&self, name: &str) -> String {
        match self.values.get(name) {
            Some(Value::Link(target)) if !target.is_resolved() => self
                .wire_label(name, target)
                .map_or_else(|| target.label(), ToString::to_string),
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }
}

#[derive(Clone, Debug)]
enum EntityState {
    Unresolved,
    Resolved(Box<Record>),
}

/// An instance of a Netdot resource kind.
#[derive(Clone, Debug)]
pub struct Entity {
    kind: &'static str,
    id: Option<u64>,
    state: EntityState,
}

// Verify Entity is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Entity>();
};

impl Entity {
    /// Creates a new, unsaved entity with every field at its default.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the schema is invalid (e.g. a
    /// field without a name), and [`ResourceError::Field`] if a declared
    /// default cannot be parsed.
    pub fn new(schema: &'static ResourceSchema) -> Result<Self, ResourceError> {
        schema.validate()?;
        let values = schema
            .fields
            .iter()
            .map(|field| Ok((field.name, field.default_value()?)))
            .collect::<Result<FieldValues, FieldError>>()?;

        Ok(Self {
            kind: schema.name,
            id: None,
            state: EntityState::Resolved(Box::new(Record {
                schema,
                raw: Attributes::new(),
                values,
                snapshot: StateSnapshot::new(),
            })),
        })
    }

    /// Creates a reference to an existing entity without fetching it.
    #[must_use]
    pub const fn unresolved(kind: &'static str, id: u64) -> Self {
        Self {
            kind,
            id: Some(id),
            state: EntityState::Unresolved,
        }
    }

    /// Builds a resolved entity from the wire attributes of one record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] if the schema is invalid,
    /// [`ResourceError::MissingId`] if the record has no id, and
    /// [`ResourceError::Field`] if the id or a field value is malformed.
    pub fn from_attributes(
        schema: &'static ResourceSchema,
        attributes: &Attributes,
    ) -> Result<Self, ResourceError> {
        schema.validate()?;
        let raw_id = attributes
            .get(schema.id_field)
            .ok_or(ResourceError::MissingId {
                resource: schema.name,
            })?;
        let id = raw_id
            .trim()
            .parse::<u64>()
            .map_err(|_| FieldError::InvalidInteger {
                field: schema.id_field,
                value: raw_id.clone(),
            })?;

        let values = schema
            .fields
            .iter()
            .map(|field| Ok((field.name, field.parse(attributes)?)))
            .collect::<Result<FieldValues, FieldError>>()?;
        let snapshot = StateSnapshot::capture(schema.fields, &values);

        Ok(Self {
            kind: schema.name,
            id: Some(id),
            state: EntityState::Resolved(Box::new(Record {
                schema,
                raw: attributes.clone(),
                values,
                snapshot,
            })),
        })
    }

    /// Returns the kind name.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns the id, or `None` if the entity was never saved.
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    /// Returns `true` if the fields are loaded.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self.state, EntityState::Resolved(_))
    }

    /// Returns the schema, once resolved.
    #[must_use]
    pub fn schema(&self) -> Option<&'static ResourceSchema> {
        self.record().map(|record| record.schema)
    }

    /// Returns the wire attributes of the last response, once resolved.
    #[must_use]
    pub fn raw_attributes(&self) -> Option<&Attributes> {
        self.record().map(|record| &record.raw)
    }

    fn record(&self) -> Option<&Record> {
        match &self.state {
            EntityState::Resolved(record) => Some(&**record),
            EntityState::Unresolved => None,
        }
    }

    fn schema_in(&self, client: &RestClient) -> Result<&'static ResourceSchema, ResourceError> {
        match self.record() {
            Some(record) => Ok(record.schema),
            None => Ok(client.schema(self.kind)?),
        }
    }

    async fn resolved(&mut self, client: &RestClient) -> Result<&mut Record, ResourceError> {
        self.resolve(client).await?;
        match &mut self.state {
            EntityState::Resolved(record) => Ok(&mut **record),
            EntityState::Unresolved => Err(ResourceError::NotPersisted {
                resource: self.kind,
            }),
        }
    }

    /// Fetches the fields if they are not loaded yet.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the server has no entity with
    /// this id, [`ResourceError::Config`] if the kind is not registered on
    /// `client`, and transport or decoding errors.
    pub async fn resolve(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        if self.is_resolved() {
            return Ok(());
        }
        self.refresh(client).await
    }

    /// Fetches the fields again, discarding local changes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] for an entity without id, and
    /// the errors of [`resolve`](Self::resolve).
    pub async fn refresh(&mut self, client: &RestClient) -> Result<(), ResourceError> {
        let schema = self.schema_in(client)?;
        let path = operation_path(schema, ResourceOperation::Find, self.id)?;

        tracing::debug!(resource = schema.name, id = ?self.id, "resolving entity");
        let response = client.get(&path, None).await?;
        ensure_success(&response, schema.name, self.id)?;

        let document = XmlDocument::parse(&response.body)?;
        *self = Self::from_attributes(schema, &document.root)?;
        Ok(())
    }

    /// Returns the value of a field, resolving the entity first.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] for an unknown field, and the
    /// errors of [`resolve`](Self::resolve).
    pub async fn get(&mut self, client: &RestClient, name: &str) -> Result<&Value, ResourceError> {
        let record = self.resolved(client).await?;
        let field = record.schema.require_field(name)?;
        Ok(record.values.get(field.name).unwrap_or(&Value::Null))
    }

    /// Returns the value of a field without any network access.
    ///
    /// Returns `None` if the entity is unresolved or has no such field.
    #[must_use]
    pub fn peek(&self, name: &str) -> Option<&Value> {
        let record = self.record()?;
        let field = record.schema.field(name)?;
        Some(record.values.get(field.name).unwrap_or(&Value::Null))
    }

    /// Assigns a field, resolving the entity first.
    ///
    /// The value is coerced by the field's descriptor: link fields accept an
    /// entity of the target kind or a bare id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] for an unknown field,
    /// [`ResourceError::Field`] for a value of the wrong kind, and the
    /// errors of [`resolve`](Self::resolve).
    pub async fn set(
        &mut self,
        client: &RestClient,
        name: &str,
        value: impl Into<Value> + Send,
    ) -> Result<(), ResourceError> {
        let value = value.into();
        let record = self.resolved(client).await?;
        let field = record.schema.require_field(name)?;
        let value = field.coerce(value)?;
        record.values.insert(field.name, value);
        Ok(())
    }

    /// Returns the entity a link field points to, for traversal.
    ///
    /// The target is usually unresolved; reading its fields fetches it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Field`] if the field is not a link, and the
    /// errors of [`get`](Self::get).
    pub async fn link_mut(
        &mut self,
        client: &RestClient,
        name: &str,
    ) -> Result<Option<&mut Self>, ResourceError> {
        let record = self.resolved(client).await?;
        let field = record.schema.require_field(name)?;
        if field.link_target().is_none() {
            return Err(FieldError::TypeMismatch {
                field: field.name,
                expected: "link",
            }
            .into());
        }
        Ok(record.values.get_mut(field.name).and_then(Value::as_link_mut))
    }

    /// Returns `true` if the entity has changes that are not on the server.
    ///
    /// An entity that was never saved is always dirty; an unresolved entity
    /// never is.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        if self.id.is_none() {
            return true;
        }
        self.record()
            .is_some_and(|record| record.snapshot.is_dirty(record.schema.fields, &record.values))
    }

    /// Returns the names of the fields that changed since the last
    /// synchronization, in declaration order.
    #[must_use]
    pub fn dirty_fields(&self) -> Vec<&'static str> {
        self.record()
            .map(|record| {
                record
                    .snapshot
                    .changed_fields(record.schema.fields, &record.values)
                    .iter()
                    .map(|field| field.name)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Writes the entity to the server.
    ///
    /// A clean entity is not sent. An existing entity posts its dirty fields
    /// to `<Kind>/<id>`; a new one posts every field to `<Kind>/`. The
    /// server's answer then replaces the local state.
    ///
    /// Returns `Ok(false)` if the server answers 404.
    ///
    /// # Errors
    ///
    /// Returns transport errors for other non-success statuses, and decoding
    /// errors for a malformed answer.
    pub async fn save(&mut self, client: &RestClient) -> Result<bool, ResourceError> {
        if !self.is_dirty() {
            return Ok(true);
        }
        let Some(record) = self.record() else {
            return Ok(true);
        };

        let schema = record.schema;
        let (operation, fields) = match self.id {
            Some(_) => (
                ResourceOperation::Update,
                record.snapshot.changed_fields(schema.fields, &record.values),
            ),
            None => (ResourceOperation::Create, schema.fields.iter().collect()),
        };

        let mut params: BTreeMap<String, String> = fields
            .iter()
            .map(|field| {
                let value = record.values.get(field.name).unwrap_or(&Value::Null);
                (field.name.to_string(), field.serialize(value))
            })
            .collect();
        if let Some(hook) = schema.pre_save {
            hook(&mut params);
        }

        let path = operation_path(schema, operation, self.id)?;
        tracing::debug!(
            resource = schema.name,
            id = ?self.id,
            operation = operation.as_str(),
            fields = params.len(),
            "saving entity"
        );
        let response = client.post(&path, params).await?;
        if response.is_not_found() {
            return Ok(false);
        }
        ensure_success(&response, schema.name, self.id)?;

        let document = XmlDocument::parse(&response.body)?;
        *self = Self::from_attributes(schema, &document.root)?;
        Ok(true)
    }

    /// Deletes the entity on the server and forgets its id, so a later
    /// [`save`](Self::save) creates a new one.
    ///
    /// Returns `Ok(true)` without a request for an entity that was never
    /// saved, and `Ok(false)` if the server answers 404.
    ///
    /// # Errors
    ///
    /// Returns transport errors for other non-success statuses.
    pub async fn delete(&mut self, client: &RestClient) -> Result<bool, ResourceError> {
        let Some(id) = self.id else {
            return Ok(true);
        };
        let schema = self.schema_in(client)?;
        let path = operation_path(schema, ResourceOperation::Delete, Some(id))?;

        tracing::debug!(resource = schema.name, id, "deleting entity");
        let response = client.delete(&path).await?;
        if response.is_not_found() {
            return Ok(false);
        }
        ensure_success(&response, schema.name, Some(id))?;

        self.id = None;
        if let EntityState::Resolved(record) = &mut self.state {
            record.snapshot.reset();
        } else {
            *self = Self::new(schema)?;
        }
        Ok(true)
    }

    /// Renders the label followed by one `\t<name>: <value>` line per field
    /// of a view. Linked entities are shown by their label.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] for a view the kind does not define
    /// (`all` is always available), and resolution errors.
    pub async fn display(&mut self, client: &RestClient, view: &str) -> Result<String, ResourceError> {
        let schema = self.schema_in(client)?;
        let names = schema.view_fields(view)?;

        let mut output = format!("{}:\n", self.resolve_label(client).await?);
        for name in names {
            let value = self.render_field(client, name).await?;
            output.push_str(&format!("\t{name}: {value}\n"));
        }
        Ok(output)
    }

    /// Renders every field; see [`display`](Self::display).
    ///
    /// # Errors
    ///
    /// Returns resolution errors.
    pub async fn dump(&mut self, client: &RestClient) -> Result<String, ResourceError> {
        self.display(client, ALL_VIEW).await
    }

    async fn render_field(
        &mut self,
        client: &RestClient,
        name: &str,
    ) -> Result<String, ResourceError> {
        let record = self.resolved(client).await?;
        let field = record.schema.require_field(name)?;
        if let Some(Value::Link(target)) = record.values.get_mut(field.name) {
            if client.registry().contains(target.kind()) {
                return target.resolve_label(client).await;
            }
        }
        Ok(record.render_local(field.name))
    }

    /// Returns the label computed from locally available state.
    ///
    /// An unresolved entity is labelled `<Kind>/<id>`. An unresolved link
    /// inside the label shows the label the server sent along with it
    /// (`name="core-1" name_xlink="RR/5"`), or `<Kind>/<id>` without one.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.state {
            EntityState::Unresolved => {
                format!("{}/{}", self.kind, self.id.unwrap_or_default())
            }
            EntityState::Resolved(record) => {
                let parts: Vec<String> = record
                    .schema
                    .label_fields
                    .iter()
                    .map(|name| record.render_local(name))
                    .collect();
                record.schema.compose_label(&parts)
            }
        }
    }

    /// Resolves the entity and the linked entities its label is made of,
    /// then returns the label.
    ///
    /// Links to kinds that are not registered on `client` are not fetched
    /// and keep their local label.
    pub fn resolve_label<'a>(&'a mut self, client: &'a RestClient) -> LabelFuture<'a> {
        Box::pin(async move {
            let record = self.resolved(client).await?;
            for name in record.schema.label_fields {
                if let Some(Value::Link(target)) = record.values.get_mut(name) {
                    if client.registry().contains(target.kind()) {
                        target.resolve_label(client).await?;
                    }
                }
            }
            Ok(self.label())
        })
    }

    /// Searches the entities of another kind that link back to this one,
    /// e.g. the `interfaces` of a `Device`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] for an undefined collection or a
    /// target kind that is not registered, [`ResourceError::NotPersisted`]
    /// for an entity without id, and search errors.
    pub async fn related(
        &self,
        client: &RestClient,
        collection: &str,
    ) -> Result<Vec<Self>, ResourceError> {
        let schema = self.schema_in(client)?;
        let collection = schema.collection(collection)?;
        let id = self.id.ok_or(ResourceError::NotPersisted {
            resource: schema.name,
        })?;

        client
            .resource(collection.target)?
            .search(SearchCriteria::new().with(collection.field, Self::unresolved(schema.name, id)))
            .await
    }
}

fn operation_path(
    schema: &ResourceSchema,
    operation: ResourceOperation,
    id: Option<u64>,
) -> Result<String, ResourceError> {
    build_path(schema, operation, id).ok_or(ResourceError::NotPersisted {
        resource: schema.name,
    })
}

/// Shows the [`label`](Entity::label).
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Entities are equal when they have the same kind and the same id. Unsaved
/// entities are never equal.
impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id.is_some() && self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::rest::resources::{DEVICE, INTERFACE, IPBLOCK, RR};
    use crate::rest::FieldDescriptor;

    static NAMELESS: ResourceSchema =
        ResourceSchema::new("Broken", "Broken/", &[FieldDescriptor::string("")]);

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn ipblock() -> Entity {
        Entity::from_attributes(
            &IPBLOCK,
            &attrs(&[
                ("id", "66"),
                ("address", "10.33.1.66"),
                ("prefix", "32"),
                ("status", "Static"),
                ("status_xlink", "IpblockStatus/4"),
                ("monitored", "0"),
                ("last_seen", "1970-01-02 00:00:01"),
            ]),
        )
        .unwrap()
    }

    #[test]
    fn test_from_attributes_is_resolved_and_clean() {
        let block = ipblock();
        assert_eq!(block.kind(), "Ipblock");
        assert_eq!(block.id(), Some(66));
        assert!(block.is_resolved());
        assert!(!block.is_dirty());
        assert!(block.dirty_fields().is_empty());
        assert_eq!(block.raw_attributes().unwrap()["status"], "Static");
    }

    #[test]
    fn test_from_attributes_decodes_fields() {
        let block = ipblock();
        assert_eq!(block.peek("prefix"), Some(&Value::Integer(32)));
        assert_eq!(block.peek("monitored"), Some(&Value::Bool(false)));
        assert_eq!(block.peek("last_seen"), Some(&Value::Null));
        assert_eq!(block.peek("description"), Some(&Value::from("")));

        let status = block.peek("status").and_then(Value::as_link).unwrap();
        assert_eq!(status.kind(), "IpblockStatus");
        assert_eq!(status.id(), Some(4));
        assert!(!status.is_resolved());
        assert!(block.peek("nonexistent").is_none());
    }

    #[test]
    fn test_from_attributes_requires_id() {
        assert!(matches!(
            Entity::from_attributes(&IPBLOCK, &attrs(&[("address", "10.0.0.1")])),
            Err(ResourceError::MissingId { resource: "Ipblock" })
        ));
        assert!(matches!(
            Entity::from_attributes(&IPBLOCK, &attrs(&[("id", "x")])),
            Err(ResourceError::Field(FieldError::InvalidInteger { field: "id", .. }))
        ));
    }

    #[test]
    fn test_from_attributes_propagates_integer_errors() {
        assert!(matches!(
            Entity::from_attributes(&IPBLOCK, &attrs(&[("id", "1"), ("prefix", "wide")])),
            Err(ResourceError::Field(FieldError::InvalidInteger { field: "prefix", .. }))
        ));
    }

    #[test]
    fn test_label() {
        assert_eq!(ipblock().label(), "10.33.1.66/32");
        assert_eq!(ipblock().to_string(), "10.33.1.66/32");
        assert_eq!(Entity::unresolved("Zone", 3).label(), "Zone/3");

        let record = Entity::from_attributes(
            &RR,
            &attrs(&[("id", "5"), ("name", "www"), ("zone_xlink", "Zone/3")]),
        )
        .unwrap();
        assert_eq!(record.label(), "www.Zone/3");
    }

    #[test]
    fn test_label_uses_wire_label_of_unresolved_links() {
        let device = Entity::from_attributes(
            &DEVICE,
            &attrs(&[("id", "12"), ("name", "core-1"), ("name_xlink", "RR/5")]),
        )
        .unwrap();
        assert_eq!(device.label(), "core-1");
        assert_eq!(device.to_string(), "core-1");

        let interface = Entity::from_attributes(
            &INTERFACE,
            &attrs(&[
                ("id", "7"),
                ("name", "Gi0/1"),
                ("device", "core-1"),
                ("device_xlink", "Device/12"),
            ]),
        )
        .unwrap();
        assert_eq!(interface.label(), "Gi0/1 core-1");
    }

    #[test]
    fn test_label_ignores_wire_label_of_replaced_link() {
        let mut interface = Entity::from_attributes(
            &INTERFACE,
            &attrs(&[
                ("id", "7"),
                ("name", "Gi0/1"),
                ("device", "core-1"),
                ("device_xlink", "Device/12"),
            ]),
        )
        .unwrap();

        if let EntityState::Resolved(record) = &mut interface.state {
            record
                .values
                .insert("device", Value::from(Entity::unresolved("Device", 13)));
        }
        assert_eq!(interface.label(), "Gi0/1 Device/13");
    }

    #[test]
    fn test_nameless_field_is_rejected() {
        assert!(matches!(
            Entity::new(&NAMELESS),
            Err(ResourceError::Config(ConfigError::EmptyFieldName { resource: "Broken" }))
        ));
        assert!(matches!(
            Entity::from_attributes(&NAMELESS, &attrs(&[("id", "1")])),
            Err(ResourceError::Config(ConfigError::EmptyFieldName { resource: "Broken" }))
        ));
    }

    #[test]
    fn test_new_entity_is_always_dirty() {
        let device = Entity::new(&DEVICE).unwrap();
        assert_eq!(device.id(), None);
        assert!(device.is_resolved());
        assert!(device.is_dirty());
        assert_eq!(device.dirty_fields().len(), DEVICE.fields.len());
        assert_eq!(device.peek("monitored"), Some(&Value::Bool(false)));
        assert_eq!(device.peek("site"), Some(&Value::Null));
    }

    #[test]
    fn test_unresolved_entity() {
        let zone = Entity::unresolved("Zone", 3);
        assert!(!zone.is_resolved());
        assert!(!zone.is_dirty());
        assert!(zone.dirty_fields().is_empty());
        assert!(zone.peek("name").is_none());
        assert!(zone.schema().is_none());
    }

    #[test]
    fn test_equality_by_kind_and_id() {
        assert_eq!(Entity::unresolved("Ipblock", 66), ipblock());
        assert_ne!(Entity::unresolved("Ipblock", 67), ipblock());
        assert_ne!(Entity::unresolved("Device", 66), ipblock());

        let first = Entity::new(&DEVICE).unwrap();
        let second = Entity::new(&DEVICE).unwrap();
        assert_ne!(first, second);
    }
}
