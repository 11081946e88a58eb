//! Authentication error types for the Netdot API client.
//!
//! Authentication failures are fatal: the client never retries a login that
//! the server rejected.

use thiserror::Error;

/// Errors that can occur while establishing a Netdot session.
///
/// # Example
///
/// ```rust
/// use netdot_api::AuthError;
///
/// let error = AuthError::InvalidCredentials {
///     username: "admin".to_string(),
///     status: 401,
/// };
/// assert!(error.to_string().contains("admin"));
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// The form login was rejected.
    #[error("Login as '{username}' was rejected with status {status}. Check the configured credentials.")]
    InvalidCredentials {
        /// The user name that was used.
        username: String,
        /// The HTTP status code returned by the login endpoint.
        status: u16,
    },

    /// The negotiated authentication handshake was rejected.
    #[error("Negotiated authentication was rejected with status {status}")]
    NegotiationRejected {
        /// The HTTP status code returned by the server.
        status: u16,
    },

    /// Network or connection error while logging in.
    #[error("Network error during login: {0}")]
    Network(#[from] reqwest::Error),
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
