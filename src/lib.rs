//! # Netdot API Rust Client
//!
//! A Rust client for [Netdot](https://github.com/cvicente/Netdot), the
//! network documentation and inventory tool. Netdot's resources (devices,
//! interfaces, IP blocks, DNS records, ...) are exposed as typed, lazily
//! resolved, dirty-tracked objects backed by its REST+XML interface.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`NetdotConfig`] and [`NetdotConfigBuilder`]
//! - Validated newtypes for the server URL and credentials
//! - A settings file loader ([`Settings`])
//! - Session handling with credential or negotiated login, and a single
//!   transparent re-login when the server reports an expired session
//! - An async REST client ([`RestClient`])
//! - Generic object mapping over any resource kind ([`rest`])
//!
//! ## Quick Start
//!
//! ```rust
//! use netdot_api::{BaseUrl, NetdotConfig, Password, Username};
//!
//! let config = NetdotConfig::builder()
//!     .url(BaseUrl::new("https://netdot.example.com/netdot").unwrap())
//!     .username(Username::new("admin").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.url().as_ref(), "https://netdot.example.com/netdot/");
//! ```
//!
//! Or from `~/.netdot.yaml` (overridden by `NETDOT_SETTINGS`):
//!
//! ```rust,ignore
//! use netdot_api::Settings;
//!
//! let config = Settings::load().into_config()?;
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use netdot_api::RestClient;
//! use netdot_api::rest::resources::{Device, Ipblock};
//! use netdot_api::rest::{NetdotResource, SearchCriteria};
//!
//! let client = RestClient::new(&config)?;
//!
//! let block = Ipblock::get_first(&client, SearchCriteria::new().with("address", "10.33.1.66"))
//!     .await?
//!     .expect("address is documented");
//! println!("{block}"); // 10.33.1.66/32
//!
//! let mut device = Device::get(12);
//! device.set(&client, "info", "decommissioned").await?;
//! device.save(&client).await?;
//!
//! for interface in device.related(&client, "interfaces").await? {
//!     println!("{interface}");
//! }
//!
//! // Any other kind can be reached by name once its schema is registered
//! let zones = client.resource("Zone")?.all().await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and session live in the client
//! - **Fail-fast validation**: newtypes and schemas validate on construction
//! - **Thread-safe**: clients and entities are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Absence is not an error**: 404 on search, save and delete is reported
//!   as an empty result or `false`

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, AuthMode, Session};
pub use config::{
    BaseUrl, Credentials, NetdotConfig, NetdotConfigBuilder, Password, Settings, Username,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, RequestOptions, RestClient, RestError,
};

// Re-export the object mapping entry points
pub use rest::{Entity, NetdotResource, ResourceError, SearchCriteria, Value};
