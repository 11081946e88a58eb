//! Resource-specific error types for REST operations.
//!
//! This module contains error types for resource operations, extending
//! the base [`RestError`](crate::clients::RestError) with resource-specific
//! semantics like `NotFound`.
//!
//! # Error Handling
//!
//! - **404 on a fetch**: [`ResourceError::NotFound`]
//! - **404 on a search**: not an error, the search returns no entities
//! - **404 on save/delete**: not an error, the operation returns `false`
//! - **Other non-success statuses**: [`ResourceError::Http`]
//! - **Malformed wire values**: [`ResourceError::Field`]
//! - **Malformed XML**: [`ResourceError::Decode`]
//! - **Schema misuse** (unknown view, empty search): [`ResourceError::Config`]
//!
//! # Example
//!
//! ```rust,ignore
//! use netdot_api::rest::ResourceError;
//!
//! match device.resolve(&client).await {
//!     Ok(()) => println!("Device: {}", device),
//!     Err(ResourceError::NotFound { resource, id }) => {
//!         println!("{} with id {} not found", resource, id);
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::{HttpError, HttpResponse, HttpResponseError, RestError};
use crate::error::ConfigError;
use thiserror::Error;

/// Error raised when a wire value cannot be coerced by its field descriptor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The value of an integer field is not a number.
    #[error("Field '{field}' expects an integer, got '{value}'")]
    InvalidInteger {
        /// The field name.
        field: &'static str,
        /// The offending wire value.
        value: String,
    },

    /// The value of a date field cannot be parsed.
    #[error("Field '{field}' expects a date, got '{value}'")]
    InvalidDate {
        /// The field name.
        field: &'static str,
        /// The offending wire value.
        value: String,
    },

    /// The `<field>_xlink` attribute does not end with a numeric id.
    #[error("Field '{field}' has an invalid link '{value}'")]
    InvalidLink {
        /// The field name.
        field: &'static str,
        /// The offending xlink value.
        value: String,
    },

    /// A value of the wrong kind was assigned to a field.
    #[error("Field '{field}' expects a value of kind {expected}")]
    TypeMismatch {
        /// The field name.
        field: &'static str,
        /// The kind the field accepts.
        expected: &'static str,
    },
}

/// Error raised when a response body cannot be decoded.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not well-formed XML.
    #[error("Malformed XML response: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The body contains no root element.
    #[error("XML response has no root element")]
    MissingRoot,
}

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use netdot_api::rest::ResourceError;
///
/// let error = ResourceError::NotFound {
///     resource: "Device",
///     id: "12".to_string(),
/// };
/// assert!(error.to_string().contains("Device"));
/// assert!(error.to_string().contains("12"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The resource was not found (HTTP 404).
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// The resource kind (e.g., "Device", "Ipblock").
        resource: &'static str,
        /// The ID that was requested.
        id: String,
    },

    /// A wire value could not be coerced.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// A record returned by the server carries no id.
    #[error("{resource} record returned by the server has no id")]
    MissingId {
        /// The resource kind.
        resource: &'static str,
    },

    /// The operation needs an entity that was saved before.
    #[error("{resource} has not been saved yet and has no id")]
    NotPersisted {
        /// The resource kind.
        resource: &'static str,
    },

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The resource schema was used incorrectly.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Creates a `ResourceError` from a non-success HTTP status.
    ///
    /// Maps 404 to `NotFound`; everything else becomes an `Http` error
    /// carrying the status and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use netdot_api::rest::ResourceError;
    ///
    /// let error = ResourceError::from_http_response(404, "Not Found", "Device", Some("12"));
    /// assert!(matches!(error, ResourceError::NotFound { .. }));
    ///
    /// let error = ResourceError::from_http_response(500, "boom", "Device", None);
    /// assert!(matches!(error, ResourceError::Http(_)));
    /// ```
    #[must_use]
    pub fn from_http_response(
        code: u16,
        message: &str,
        resource: &'static str,
        id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            _ => Self::Http(HttpError::Response(HttpResponseError {
                code,
                message: message.to_string(),
            })),
        }
    }
}

/// Returns an error for a non-success response.
pub(crate) fn ensure_success(
    response: &HttpResponse,
    resource: &'static str,
    id: Option<u64>,
) -> Result<(), ResourceError> {
    if response.is_ok() {
        return Ok(());
    }
    let id = id.map(|id| id.to_string());
    Err(ResourceError::from_http_response(
        response.code,
        &response.error_message(),
        resource,
        id.as_deref(),
    ))
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
    assert_send_sync::<DecodeError>();
};
