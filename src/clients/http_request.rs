//! HTTP request types for the Netdot API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Netdot server.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::time::Duration;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Netdot REST interface.
///
/// Netdot creates and updates with POST, so there is no PUT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for fetching and searching resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Netdot server.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use netdot_api::clients::{HttpRequest, HttpMethod};
///
/// // Search request
/// let get_request = HttpRequest::builder(HttpMethod::Get, "rest/Device/")
///     .query_param("name", "router1")
///     .build()
///     .unwrap();
///
/// // Update request with form parameters
/// let post_request = HttpRequest::builder(HttpMethod::Post, "rest/Device/12")
///     .form_param("info", "core router")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters to append to the URL.
    pub query: Option<BTreeMap<String, String>>,
    /// Form parameters sent as an `application/x-www-form-urlencoded` body.
    pub form: Option<BTreeMap<String, String>>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Timeout for this request, overriding the client default.
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::UnexpectedForm`] if form parameters
    /// are set on a GET or DELETE request.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.form.is_some() && !matches!(self.http_method, HttpMethod::Post) {
            return Err(InvalidHttpRequestError::UnexpectedForm {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Option<BTreeMap<String, String>>,
    form: Option<BTreeMap<String, String>>,
    extra_headers: Option<HashMap<String, String>>,
    timeout: Option<Duration>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: None,
            form: None,
            extra_headers: None,
            timeout: None,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all form parameters at once.
    #[must_use]
    pub fn form(mut self, form: BTreeMap<String, String>) -> Self {
        self.form = Some(form);
        self
    }

    /// Adds a single form parameter.
    #[must_use]
    pub fn form_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the timeout for this request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            form: self.form,
            extra_headers: self.extra_headers,
            timeout: self.timeout,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "rest/Device/")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "rest/Device/");
        assert!(request.query.is_none());
        assert!(request.form.is_none());
        assert!(request.timeout.is_none());
    }

    #[test]
    fn test_post_without_form_is_valid() {
        // Saving an entity with no dirty fields never reaches the transport,
        // but an empty POST is still a well-formed request.
        let request = HttpRequest::builder(HttpMethod::Post, "rest/Device/12")
            .build()
            .unwrap();
        assert!(request.form.is_none());
    }

    #[test]
    fn test_verify_rejects_form_on_get() {
        let result = HttpRequest::builder(HttpMethod::Get, "rest/Device/")
            .form_param("name", "router1")
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedForm { method }) if method == "get"
        ));
    }

    #[test]
    fn test_builder_with_query_params() {
        let request = HttpRequest::builder(HttpMethod::Get, "rest/Ipblock/")
            .query_param("address", "10.33.1.66")
            .query_param("prefix", "32")
            .build()
            .unwrap();

        let query = request.query.unwrap();
        assert_eq!(query.get("address"), Some(&"10.33.1.66".to_string()));
        assert_eq!(query.get("prefix"), Some(&"32".to_string()));
    }

    #[test]
    fn test_builder_with_extra_headers_and_timeout() {
        let request = HttpRequest::builder(HttpMethod::Delete, "rest/Device/12")
            .header("X-Request-Origin", "sync-job")
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();

        let headers = request.extra_headers.unwrap();
        assert_eq!(
            headers.get("X-Request-Origin"),
            Some(&"sync-job".to_string())
        );
        assert_eq!(request.timeout, Some(Duration::from_secs(3)));
    }
}
