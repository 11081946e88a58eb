//! Class-level resource operations.
//!
//! [`ResourceHandle`] performs the operations that are not tied to one
//! instance (`all`, `search`, `get`, ...) for any kind registered on a
//! client, looked up by name:
//!
//! ```rust,ignore
//! let zones = client.resource("Zone")?.all().await?;
//! ```
//!
//! The bundled kinds additionally implement [`NetdotResource`], which offers
//! the same operations without the lookup:
//!
//! ```rust,ignore
//! use netdot_api::rest::resources::{Ipblock, IpblockStatus};
//! use netdot_api::rest::{NetdotResource, SearchCriteria};
//!
//! let subnets = Ipblock::search(
//!     &client,
//!     SearchCriteria::new().with("status", IpblockStatus::get(5)),
//! )
//! .await?;
//! ```

use std::collections::BTreeMap;

use crate::clients::RestClient;
use crate::error::ConfigError;
use crate::rest::decoder::XmlDocument;
use crate::rest::errors::ensure_success;
use crate::rest::path::{build_path, ResourceOperation};
use crate::rest::{Entity, ResourceError, ResourceSchema, Value};

/// Filter of a search, as field name to value.
///
/// Entity values are sent as their id, booleans as `1`/`0`.
///
/// # Example
///
/// ```rust
/// use netdot_api::rest::{Entity, SearchCriteria};
///
/// let criteria = SearchCriteria::new()
///     .with("address", "10.33.1.66")
///     .with("status", Entity::unresolved("IpblockStatus", 4))
///     .with("monitored", true);
///
/// let query = criteria.to_query().unwrap();
/// assert_eq!(query["address"], "10.33.1.66");
/// assert_eq!(query["status"], "4");
/// assert_eq!(query["monitored"], "1");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchCriteria {
    criteria: BTreeMap<String, Value>,
}

impl SearchCriteria {
    /// Creates empty criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.criteria.insert(name.into(), value.into());
        self
    }

    /// Returns `true` if no criterion was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Returns the number of criteria.
    #[must_use]
    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Renders the criteria as query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotPersisted`] for an entity value without
    /// id.
    pub fn to_query(&self) -> Result<BTreeMap<String, String>, ResourceError> {
        self.criteria
            .iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::Link(entity) => entity
                        .id()
                        .ok_or(ResourceError::NotPersisted {
                            resource: entity.kind(),
                        })?
                        .to_string(),
                    Value::Bool(flag) => if *flag { "1" } else { "0" }.to_string(),
                    other => other.to_string(),
                };
                Ok((name.clone(), value))
            })
            .collect()
    }
}

/// Class-level operations on one resource kind.
#[derive(Clone, Copy, Debug)]
pub struct ResourceHandle<'a> {
    client: &'a RestClient,
    schema: &'static ResourceSchema,
}

impl<'a> ResourceHandle<'a> {
    /// Creates a handle for `schema` using `client`.
    #[must_use]
    pub const fn new(client: &'a RestClient, schema: &'static ResourceSchema) -> Self {
        Self { client, schema }
    }

    /// Returns the schema of the kind.
    #[must_use]
    pub const fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    /// Fetches every instance of the kind.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Config`] (before any request) for an invalid
    /// schema, and transport, decoding and field errors. A 404 is not an
    /// error and yields no entities.
    pub async fn all(&self) -> Result<Vec<Entity>, ResourceError> {
        self.fetch(None).await
    }

    /// Fetches the instances matching `criteria`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSearchCriteria`] (before any request)
    /// if `criteria` is empty, and the errors of [`all`](Self::all).
    pub async fn search(&self, criteria: SearchCriteria) -> Result<Vec<Entity>, ResourceError> {
        if criteria.is_empty() {
            return Err(ConfigError::MissingSearchCriteria {
                resource: self.schema.name.to_string(),
            }
            .into());
        }
        self.fetch(Some(criteria.to_query()?)).await
    }

    /// Returns the first instance matching `criteria`, if any.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`search`](Self::search).
    pub async fn get_first(&self, criteria: SearchCriteria) -> Result<Option<Entity>, ResourceError> {
        Ok(self.search(criteria).await?.into_iter().next())
    }

    /// Returns an unresolved reference to the instance with `id`, without a
    /// request. It is fetched on first field access.
    #[must_use]
    pub const fn get(&self, id: u64) -> Entity {
        Entity::unresolved(self.schema.name, id)
    }

    /// Returns a new, unsaved instance with default values.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Field`] if a declared default is malformed.
    pub fn create(&self) -> Result<Entity, ResourceError> {
        Entity::new(self.schema)
    }

    async fn fetch(
        &self,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<Vec<Entity>, ResourceError> {
        self.schema.validate()?;
        let path = build_path(self.schema, ResourceOperation::Search, None).ok_or(
            ResourceError::NotPersisted {
                resource: self.schema.name,
            },
        )?;

        tracing::debug!(resource = self.schema.name, query = ?query, "searching entities");
        let response = self.client.get(&path, query).await?;
        if response.is_not_found() {
            return Ok(Vec::new());
        }
        ensure_success(&response, self.schema.name, None)?;

        let document = XmlDocument::parse(&response.body)?;
        document
            .records
            .iter()
            .map(|attributes| Entity::from_attributes(self.schema, attributes))
            .collect()
    }
}

/// Typed class-level access to a bundled resource kind.
///
/// Implementors only provide their schema; every operation delegates to a
/// [`ResourceHandle`]. The kind does not need to be registered on the
/// client for `search`, but resolving an unresolved entity looks its kind
/// up in the client's registry.
#[allow(async_fn_in_trait)]
pub trait NetdotResource {
    /// Returns the schema of the kind.
    fn schema() -> &'static ResourceSchema;

    /// Returns a handle for this kind on `client`.
    #[must_use]
    fn handle(client: &RestClient) -> ResourceHandle<'_> {
        ResourceHandle::new(client, Self::schema())
    }

    /// Fetches every instance. See [`ResourceHandle::all`].
    async fn all(client: &RestClient) -> Result<Vec<Entity>, ResourceError> {
        Self::handle(client).all().await
    }

    /// Fetches the matching instances. See [`ResourceHandle::search`].
    async fn search(
        client: &RestClient,
        criteria: SearchCriteria,
    ) -> Result<Vec<Entity>, ResourceError> {
        Self::handle(client).search(criteria).await
    }

    /// Fetches the first matching instance. See [`ResourceHandle::get_first`].
    async fn get_first(
        client: &RestClient,
        criteria: SearchCriteria,
    ) -> Result<Option<Entity>, ResourceError> {
        Self::handle(client).get_first(criteria).await
    }

    /// Returns an unresolved reference. See [`ResourceHandle::get`].
    #[must_use]
    fn get(id: u64) -> Entity {
        Entity::unresolved(Self::schema().name, id)
    }

    /// Returns a new, unsaved instance. See [`ResourceHandle::create`].
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Field`] if a declared default is malformed.
    fn create() -> Result<Entity, ResourceError> {
        Entity::new(Self::schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{Device, Ipblock, Zone, DEVICE};
    use chrono::NaiveDate;

    #[test]
    fn test_criteria_rendering() {
        let query = SearchCriteria::new()
            .with("name", "core")
            .with("vid", 10)
            .with("active", false)
            .with("expiration", NaiveDate::from_ymd_opt(2030, 1, 31).unwrap())
            .with("zone", Zone::get(7))
            .to_query()
            .unwrap();

        assert_eq!(query["name"], "core");
        assert_eq!(query["vid"], "10");
        assert_eq!(query["active"], "0");
        assert_eq!(query["expiration"], "2030-01-31");
        assert_eq!(query["zone"], "7");
    }

    #[test]
    fn test_criteria_with_unsaved_entity_is_an_error() {
        let unsaved = Device::create().unwrap();
        let result = SearchCriteria::new().with("device", unsaved).to_query();
        assert!(matches!(
            result,
            Err(ResourceError::NotPersisted { resource: "Device" })
        ));
    }

    #[test]
    fn test_criteria_len() {
        let criteria = SearchCriteria::new().with("a", 1).with("b", 2).with("a", 3);
        assert_eq!(criteria.len(), 2);
        assert!(!criteria.is_empty());
        assert!(SearchCriteria::new().is_empty());
    }

    #[test]
    fn test_get_is_unresolved() {
        let block = Ipblock::get(66);
        assert_eq!(block.kind(), "Ipblock");
        assert_eq!(block.id(), Some(66));
        assert!(!block.is_resolved());
    }

    #[test]
    fn test_create_is_new() {
        let device = Device::create().unwrap();
        assert_eq!(device.schema().map(|schema| schema.name), Some(DEVICE.name));
        assert!(device.id().is_none());
        assert!(device.is_dirty());
    }
}
