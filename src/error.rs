//! Configuration error types for the Netdot API client.
//!
//! Configuration errors are fatal: they are raised immediately, before any
//! request is sent, and are never retried. They cover malformed client
//! settings as well as mistakes in resource schemas and resource usage
//! (unknown views, missing search criteria, ...).
//!
//! # Example
//!
//! ```rust
//! use netdot_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUrl)));
//! ```

use thiserror::Error;

/// Errors caused by invalid configuration or invalid use of a resource schema.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The service URL cannot be empty.
    #[error("Netdot URL cannot be empty. Please provide the base URL of the Netdot server.")]
    EmptyUrl,

    /// The service URL is invalid.
    #[error("Invalid Netdot URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://netdot.example.com/netdot/').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A field descriptor was declared without a name.
    #[error("Resource '{resource}' declares a field without a name")]
    EmptyFieldName {
        /// The resource kind declaring the field.
        resource: &'static str,
    },

    /// A resource schema was declared without a kind name or resource path.
    #[error("Resource schema is missing its {what}")]
    IncompleteSchema {
        /// The missing part (`name` or `resource path`).
        what: &'static str,
    },

    /// The same resource kind was registered twice.
    #[error("Resource '{name}' is already registered")]
    DuplicateResource {
        /// The resource kind name.
        name: String,
    },

    /// The resource kind is not registered.
    #[error("Unknown resource '{name}'")]
    UnknownResource {
        /// The resource kind name that was requested.
        name: String,
    },

    /// The field is not declared by the resource kind.
    #[error("Resource '{resource}' has no field '{field}'")]
    UnknownField {
        /// The resource kind name.
        resource: String,
        /// The unknown field name.
        field: String,
    },

    /// The view is not defined for the resource kind.
    #[error("View '{view}' not defined for resource '{resource}'")]
    UndefinedView {
        /// The resource kind name.
        resource: String,
        /// The requested view name.
        view: String,
    },

    /// The collection (reverse relation) is not defined for the resource kind.
    #[error("Collection '{collection}' not defined for resource '{resource}'")]
    UndefinedCollection {
        /// The resource kind name.
        resource: String,
        /// The requested collection name.
        collection: String,
    },

    /// A search was requested without any criteria.
    #[error("Need to specify search parameters for resource '{resource}'")]
    MissingSearchCriteria {
        /// The resource kind name.
        resource: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_error_message() {
        let error = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "username" };
        let message = error.to_string();
        assert!(message.contains("username"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_undefined_view_error_message() {
        let error = ConfigError::UndefinedView {
            resource: "Ipblock".to_string(),
            view: "fancy".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "View 'fancy' not defined for resource 'Ipblock'"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyUrl;
        let _: &dyn std::error::Error = &error;
    }
}
