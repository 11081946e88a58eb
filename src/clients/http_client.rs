//! HTTP client for Netdot server communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Netdot server. It owns the session: the first request
//! logs in, and a 403 answer triggers exactly one fresh login followed by a
//! single retry of the request.

use std::collections::HashMap;

use reqwest::header::{HeaderName, HeaderValue, COOKIE};
use tokio::sync::Mutex;

use crate::auth::{self, Session};
use crate::clients::errors::{HttpError, InvalidHttpRequestError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::NetdotConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `Accept` header selecting the XML representation of the REST interface.
pub const ACCEPT_XML: &str = "text/xml; version=1.0";

/// Status code the server uses for an expired or missing session.
const SESSION_EXPIRED: u16 = 403;

/// HTTP client for making requests to the Netdot server.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`Accept` and `User-Agent`)
/// - Session login, cookie caching and a single re-login on 403
/// - TLS verification according to the configuration
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// The session is guarded by an async mutex; concurrent requests that hit an
/// expired session log in only once.
///
/// # Example
///
/// ```rust,ignore
/// use netdot_api::{NetdotConfig, BaseUrl, Username, Password};
/// use netdot_api::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = NetdotConfig::builder()
///     .url(BaseUrl::new("https://netdot.example.com/netdot").unwrap())
///     .username(Username::new("admin").unwrap())
///     .password(Password::new("secret").unwrap())
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "rest/Device/12")
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Connection settings and credentials.
    config: NetdotConfig,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// The cached session, created on first use.
    session: Mutex<Option<Session>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// No request is sent until the first call to [`request`](Self::request)
    /// or [`login`](Self::login).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &NetdotConfig) -> Result<Self, HttpError> {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Netdot API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), ACCEPT_XML.to_string());

        // The login answer is a redirect whose cookies must be read directly
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!config.verify_tls())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
            default_headers,
            session: Mutex::new(None),
        })
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &NetdotConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a copy of the current session, if one was established.
    pub async fn session(&self) -> Option<Session> {
        self.session.lock().await.clone()
    }

    /// Logs in now, replacing any cached session.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Auth`] if the server rejects the login.
    pub async fn login(&self) -> Result<Session, HttpError> {
        let mut guard = self.session.lock().await;
        let generation = guard.as_ref().map_or(0, |session| session.generation) + 1;
        let session = auth::login(&self.client, &self.config)
            .await?
            .with_generation(generation);
        *guard = Some(session.clone());
        Ok(session)
    }

    /// Sends an HTTP request to the Netdot server.
    ///
    /// Any status other than 403 is returned as a response; interpreting it
    /// is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Logging in fails (`Auth`)
    /// - Network error occurs (`Network`)
    /// - The server answers 403 again after a fresh login (`Unauthorized`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let session = self.current_session().await?;
        let response = self.send(&request, &session).await?;
        if response.code != SESSION_EXPIRED {
            return Ok(response);
        }

        tracing::debug!(
            path = %request.path,
            generation = session.generation,
            "session rejected, logging in again"
        );
        let session = self.renew_session(session.generation).await?;
        let response = self.send(&request, &session).await?;
        if response.code == SESSION_EXPIRED {
            return Err(HttpError::Unauthorized { path: request.path });
        }

        Ok(response)
    }

    /// Returns the cached session, logging in first if there is none.
    async fn current_session(&self) -> Result<Session, HttpError> {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_ref() {
            return Ok(session.clone());
        }

        let session = auth::login(&self.client, &self.config)
            .await?
            .with_generation(1);
        *guard = Some(session.clone());
        Ok(session)
    }

    /// Replaces the session of generation `stale`, unless another task
    /// already did.
    async fn renew_session(&self, stale: u64) -> Result<Session, HttpError> {
        let mut guard = self.session.lock().await;
        if let Some(session) = guard.as_ref() {
            if session.generation != stale {
                return Ok(session.clone());
            }
        }

        let session = auth::login(&self.client, &self.config)
            .await?
            .with_generation(stale + 1);
        *guard = Some(session.clone());
        Ok(session)
    }

    /// Sends a single attempt of `request` with the given session.
    async fn send(&self, request: &HttpRequest, session: &Session) -> Result<HttpResponse, HttpError> {
        let url = self.config.url().join(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                let (name, value) = Self::header_pair(key, value)?;
                req_builder = req_builder.header(name, value);
            }
        }
        if let Some(cookie) = session.cookie_header() {
            req_builder = req_builder.header(COOKIE, cookie);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(form) = &request.form {
            req_builder = req_builder.form(form);
        }
        if let Some(timeout) = request.timeout.or_else(|| self.config.timeout()) {
            req_builder = req_builder.timeout(timeout);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Netdot request completed"
        );

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Validates a caller-provided header.
    fn header_pair(key: &str, value: &str) -> Result<(HeaderName, HeaderValue), HttpError> {
        let invalid = || InvalidHttpRequestError::InvalidHeader {
            name: key.to_string(),
        };
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| invalid())?;
        let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
        Ok((name, value))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Password, Username};

    fn create_test_config() -> NetdotConfig {
        NetdotConfig::builder()
            .url(BaseUrl::new("https://netdot.example.com/netdot").unwrap())
            .username(Username::new("admin").unwrap())
            .password(Password::new("secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Netdot API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = NetdotConfig::builder()
            .url(BaseUrl::new("https://netdot.example.com/netdot").unwrap())
            .negotiate(true)
            .user_agent_prefix("inventory-sync/2.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("inventory-sync/2.0 | "));
        assert!(user_agent.contains("Netdot API Library"));
    }

    #[test]
    fn test_accept_header_is_versioned_xml() {
        let client = HttpClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"text/xml; version=1.0".to_string())
        );
    }

    #[test]
    fn test_header_pair_rejects_invalid_name() {
        let result = HttpClient::header_pair("Bad Header", "value");
        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidHeader { .. }))
        ));
    }

    #[tokio::test]
    async fn test_no_session_before_first_request() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert!(client.session().await.is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
