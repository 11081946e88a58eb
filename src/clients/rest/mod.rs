//! REST client for the Netdot `rest/` interface.
//!
//! This module provides a higher-level client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that addresses resources by
//! their REST path (`Device/`, `Device/12`) and carries the
//! [`SchemaRegistry`](crate::rest::SchemaRegistry) used to decode them.
//!
//! # Overview
//!
//! - [`RestClient`]: The REST client with `get()`, `post()`, `delete()` methods
//! - [`RequestOptions`]: Per-request timeout and extra headers
//! - [`RestError`]: Error type for REST operations
//!
//! # Example
//!
//! ```rust,ignore
//! use netdot_api::{RestClient, Settings};
//!
//! let config = Settings::load().into_config()?;
//! let client = RestClient::new(&config)?;
//!
//! // Raw request
//! let response = client.get("Device/12", None).await?;
//!
//! // Typed access through the bundled resources
//! let devices = client.resource("Device")?.all().await?;
//! ```
//!
//! # Path Normalization
//!
//! - Leading slashes are stripped: `/Device/` -> `Device/`
//! - A leading `rest/` is accepted and not doubled
//! - Empty paths are rejected with [`RestError::InvalidPath`]

mod client;
mod errors;

pub use client::{RequestOptions, RestClient};
pub use errors::RestError;
