//! REST-specific error types for the Netdot API client.
//!
//! # Error Handling
//!
//! - [`RestError::InvalidPath`]: When a REST path fails validation
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use netdot_api::clients::rest::{RestClient, RestError};
//!
//! match client.get("Device/12", None).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(RestError::InvalidPath { path }) => {
//!         println!("Invalid path: {}", path);
//!     }
//!     Err(RestError::Http(e)) => {
//!         println!("HTTP error: {}", e);
//!     }
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST operations.
///
/// # Example
///
/// ```rust
/// use netdot_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST path is invalid.
    ///
    /// Returned when a path is empty after normalization.
    #[error("Invalid REST path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_invalid_path_error_includes_path_in_message() {
        let error = RestError::InvalidPath {
            path: "//".to_string(),
        };
        let message = error.to_string();

        assert!(message.contains("Invalid REST path"));
        assert!(message.contains("//"));
    }

    #[test]
    fn test_from_http_error_conversion() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 500,
            message: "Internal Server Error".to_string(),
        });

        let rest_error: RestError = http_error.into();

        assert!(matches!(rest_error, RestError::Http(_)));
        assert!(rest_error.to_string().contains("500"));
    }

    #[test]
    fn test_unauthorized_is_wrapped() {
        let rest_error = RestError::Http(HttpError::Unauthorized {
            path: "rest/Device/".to_string(),
        });
        assert!(rest_error.to_string().contains("re-authenticating"));
    }
}
