//! Authentication types for the Netdot API client.
//!
//! This module provides the session established against a Netdot server and
//! the login routine that creates it.
//!
//! # Overview
//!
//! - [`Session`]: The cookie-carrying session attached to every request
//! - [`AuthMode`]: Whether the session came from a form login or negotiation
//! - [`login`]: Performs the login handshake
//! - [`AuthError`]: Login failures
//!
//! Sessions are managed by [`HttpClient`](crate::clients::HttpClient): it
//! logs in on the first request and logs in again, exactly once, when the
//! server answers 403.

mod error;
mod login;
pub mod session;

pub use error::AuthError;
pub use login::login;
pub use session::{AuthMode, Session};
