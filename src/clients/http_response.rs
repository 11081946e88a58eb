//! HTTP response types for the Netdot API client.
//!
//! This module provides the [`HttpResponse`] type, a status code plus the
//! raw body bytes. Decoding the XML body is left to
//! [`XmlDocument`](crate::rest::XmlDocument).

use std::collections::HashMap;

/// An HTTP response from the Netdot server.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lowercase names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns a short description of the response for error messages.
    ///
    /// The body is used when present; otherwise the status reason phrase.
    #[must_use]
    pub fn error_message(&self) -> String {
        let text = self.text();
        let text = text.trim();
        if text.is_empty() {
            reqwest::StatusCode::from_u16(self.code)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(
                response.is_ok(),
                "Expected is_ok() to be true for code {code}"
            );
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 403, 404, 500, 503] {
            let response = HttpResponse::new(code, HashMap::new(), Vec::new());
            assert!(!response.is_ok());
        }
        assert!(HttpResponse::new(404, HashMap::new(), Vec::new()).is_not_found());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["text/xml; charset=utf-8".to_string()],
        );
        let response = HttpResponse::new(200, headers, Vec::new());

        assert_eq!(
            response.header("Content-Type"),
            Some("text/xml; charset=utf-8")
        );
        assert_eq!(response.header("X-Missing"), None);
    }

    #[test]
    fn test_error_message_prefers_body() {
        let response = HttpResponse::new(500, HashMap::new(), b"  database locked\n".to_vec());
        assert_eq!(response.error_message(), "database locked");

        let response = HttpResponse::new(500, HashMap::new(), Vec::new());
        assert_eq!(response.error_message(), "Internal Server Error");
    }

    #[test]
    fn test_text_is_lossy() {
        let response = HttpResponse::new(200, HashMap::new(), vec![b'o', b'k', 0xff]);
        assert!(response.text().starts_with("ok"));
    }
}
