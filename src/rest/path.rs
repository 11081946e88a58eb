//! Path building for resource operations.
//!
//! Netdot addresses every kind the same way, relative to `rest/`:
//!
//! | Operation | Method | Path          |
//! |-----------|--------|---------------|
//! | Find      | GET    | `<Kind>/<id>` |
//! | Search    | GET    | `<Kind>/`     |
//! | Create    | POST   | `<Kind>/`     |
//! | Update    | POST   | `<Kind>/<id>` |
//! | Delete    | DELETE | `<Kind>/<id>` |
//!
//! # Example
//!
//! ```rust
//! use netdot_api::rest::{build_path, ResourceOperation, ResourceSchema};
//!
//! static SITE: ResourceSchema = ResourceSchema::new("Site", "Site/", &[]);
//!
//! assert_eq!(build_path(&SITE, ResourceOperation::Search, None).unwrap(), "Site/");
//! assert_eq!(build_path(&SITE, ResourceOperation::Update, Some(3)).unwrap(), "Site/3");
//! assert!(build_path(&SITE, ResourceOperation::Delete, None).is_none());
//! ```

use crate::rest::ResourceSchema;

/// Operations that can be performed on a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// Fetch one instance by id.
    Find,
    /// List instances, optionally filtered.
    Search,
    /// Create a new instance.
    Create,
    /// Update fields of an existing instance.
    Update,
    /// Delete an instance.
    Delete,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::Search => "search",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Returns `true` if the operation addresses a single instance.
    #[must_use]
    pub const fn requires_id(&self) -> bool {
        matches!(self, Self::Find | Self::Update | Self::Delete)
    }
}

/// Builds the path of an operation, relative to `rest/`.
///
/// Returns `None` when the operation addresses an instance and no id is
/// available.
#[must_use]
pub fn build_path(
    schema: &ResourceSchema,
    operation: ResourceOperation,
    id: Option<u64>,
) -> Option<String> {
    if operation.requires_id() {
        id.map(|id| schema.instance_path(id))
    } else {
        Some(schema.collection_path().to_string())
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
};

#[cfg(test)]
mod tests {
    use super::*;

    static RR: ResourceSchema = ResourceSchema::new("RR", "RR/", &[]);

    #[test]
    fn test_collection_operations_ignore_id() {
        assert_eq!(
            build_path(&RR, ResourceOperation::Create, Some(9)).as_deref(),
            Some("RR/")
        );
        assert_eq!(
            build_path(&RR, ResourceOperation::Search, None).as_deref(),
            Some("RR/")
        );
    }

    #[test]
    fn test_instance_operations_need_id() {
        assert_eq!(
            build_path(&RR, ResourceOperation::Find, Some(5)).as_deref(),
            Some("RR/5")
        );
        assert!(build_path(&RR, ResourceOperation::Update, None).is_none());
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(ResourceOperation::Update.as_str(), "update");
        assert!(ResourceOperation::Delete.requires_id());
        assert!(!ResourceOperation::Search.requires_id());
    }
}
