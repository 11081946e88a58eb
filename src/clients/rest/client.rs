//! REST client implementation for the Netdot `rest/` interface.
//!
//! This module provides the [`RestClient`] type for making REST requests to
//! a Netdot server with automatic path normalization and session handling.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::NetdotConfig;
use crate::error::ConfigError;
use crate::rest::{ResourceHandle, ResourceSchema, SchemaRegistry};

/// Prefix of the REST interface, relative to the base URL.
const REST_PREFIX: &str = "rest/";

/// Per-request transport options.
///
/// # Example
///
/// ```rust
/// use netdot_api::clients::rest::RequestOptions;
/// use std::time::Duration;
///
/// let options = RequestOptions::new()
///     .timeout(Duration::from_secs(30))
///     .header("X-Request-Origin", "nightly-audit");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the timeout for the request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds an extra header to the request.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// REST client for the Netdot `rest/` interface.
///
/// Provides `get`, `post` and `delete` with paths relative to `rest/`, and
/// gives access to the resource kinds known to its [`SchemaRegistry`].
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use netdot_api::{RestClient, NetdotConfig};
///
/// let client = RestClient::new(&config)?;
///
/// // GET request
/// let response = client.get("Device/", Some(query)).await?;
///
/// // POST request with form parameters
/// let response = client.post("Device/12", params).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The resource kinds this client can decode.
    registry: SchemaRegistry,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client knowing the bundled resource kinds.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &NetdotConfig) -> Result<Self, RestError> {
        Self::with_registry(config, SchemaRegistry::builtin())
    }

    /// Creates a new REST client with a custom schema registry.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn with_registry(
        config: &NetdotConfig,
        registry: SchemaRegistry,
    ) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(
            url = %config.url(),
            kinds = registry.len(),
            "created Netdot REST client"
        );

        Ok(Self {
            http_client,
            registry,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the schema registry.
    #[must_use]
    pub const fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Looks up the schema of a resource kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownResource`] if the kind is not registered.
    pub fn schema(&self, kind: &str) -> Result<&'static ResourceSchema, ConfigError> {
        self.registry.schema(kind)
    }

    /// Returns a handle for the class-level operations of a resource kind.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownResource`] if the kind is not registered.
    pub fn resource(&self, kind: &str) -> Result<ResourceHandle<'_>, ConfigError> {
        Ok(ResourceHandle::new(self, self.schema(kind)?))
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST path (e.g., "Device/", "Device/12")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, query, None, None)
            .await
    }

    /// Sends a GET request with transport options.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get_with_options(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, query, None, Some(options))
            .await
    }

    /// Sends a POST request with form parameters to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, None, Some(params), None)
            .await
    }

    /// Sends a POST request with transport options.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post_with_options(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, None, Some(params), Some(options))
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, None, None)
            .await
    }

    /// Sends a DELETE request with transport options.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete_with_options(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, None, Some(options))
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<BTreeMap<String, String>>,
        form: Option<BTreeMap<String, String>>,
        options: Option<&RequestOptions>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }
        if let Some(form_params) = form {
            builder = builder.form(form_params);
        }
        if let Some(options) = options {
            if let Some(timeout) = options.timeout {
                builder = builder.timeout(timeout);
            }
            if !options.headers.is_empty() {
                builder = builder.extra_headers(options.headers.clone());
            }
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST path to `rest/<path>`.
///
/// Strips leading `/` characters and an existing `rest/` prefix, and returns
/// an error for empty paths. Trailing slashes are significant (`Device/`
/// addresses the collection) and are kept.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_prefix(REST_PREFIX).unwrap_or(trimmed);

    if trimmed.trim_matches('/').is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(format!("{REST_PREFIX}{trimmed}"))
}
