//! HTTP-specific error types for the Netdot API client.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-success HTTP responses surfaced to the caller
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! Only two statuses get special treatment by the transport itself: a 403
//! triggers a single re-login and retry, and a second 403 becomes
//! [`HttpError::Unauthorized`]. All other statuses are returned to the
//! caller, which decides what a 404 means for its operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use netdot_api::clients::{HttpClient, HttpRequest, HttpMethod, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Status: {}", response.code),
//!     Err(HttpError::Unauthorized { path }) => {
//!         println!("Session rejected twice for {}", path);
//!     }
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! ```

use crate::auth::AuthError;
use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// # Example
///
/// ```rust
/// use netdot_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 500,
///     message: "Internal Server Error".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Request failed with status 500: Internal Server Error");
/// ```
#[derive(Debug, Error)]
#[error("Request failed with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, or the status reason when the body is empty.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// Form parameters were given to a method that does not send a body.
    #[error("Cannot send form data with {method}.")]
    UnexpectedForm {
        /// The HTTP method that cannot carry a body.
        method: String,
    },

    /// A header name or value cannot be sent.
    #[error("Invalid header '{name}'.")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// # Example
///
/// ```rust,ignore
/// use netdot_api::HttpError;
///
/// match client.request(request).await {
///     Ok(response) => { /* handle response */ }
///     Err(HttpError::Response(e)) => { /* non-success status */ }
///     Err(HttpError::Unauthorized { .. }) => { /* re-login did not help */ }
///     Err(HttpError::InvalidRequest(e)) => { /* validation error */ }
///     Err(HttpError::Network(e)) => { /* connection error */ }
///     Err(HttpError::Auth(e)) => { /* login failed */ }
/// }
/// ```
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-success status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The server answered 403 again after a fresh login.
    #[error("Access to '{path}' denied after re-authenticating")]
    Unauthorized {
        /// The request path.
        path: String,
    },

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Logging in failed.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
