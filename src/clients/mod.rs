//! HTTP client types for Netdot server communication.
//!
//! This module provides the HTTP layer for making authenticated requests to
//! a Netdot server. It handles request/response processing, session login and
//! the single re-login retry on expired sessions.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client owning the session
//! - [`HttpRequest`]: A request to be sent to the server
//! - [`HttpResponse`]: A raw response from the server
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`rest::RestClient`]: Higher-level client for the `rest/` interface
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Session Behavior
//!
//! - The first request logs in and caches the session cookie.
//! - **403 (Forbidden)**: the session is considered expired; the client logs
//!   in again and retries the request exactly once.
//! - A second 403 yields [`HttpError::Unauthorized`].
//! - **Other statuses** are returned to the caller unchanged.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, ACCEPT_XML, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export REST client types at the clients module level
pub use rest::{RequestOptions, RestClient, RestError};
