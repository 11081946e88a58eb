//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated base URL of a Netdot installation.
///
/// The URL must carry a scheme and a host. It is normalized to always end
/// with a `/`, so resource paths can be appended directly
/// (`<base>rest/Device/`).
///
/// # Example
///
/// ```rust
/// use netdot_api::BaseUrl;
///
/// let url = BaseUrl::new("https://netdot.example.com/netdot").unwrap();
/// assert_eq!(url.as_ref(), "https://netdot.example.com/netdot/");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "netdot.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUrl`] if the URL is empty and
    /// [`ConfigError::InvalidUrl`] if it has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let mut url = url.trim().to_string();

        if url.is_empty() {
            return Err(ConfigError::EmptyUrl);
        }

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        if remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidUrl { url: url.clone() });
        }

        if !url.ends_with('/') {
            url.push('/');
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative path onto the base URL.
    ///
    /// Leading slashes on `path` are ignored.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for BaseUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Netdot user name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated user name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "username" });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Netdot password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so it never leaks into logs.
///
/// # Example
///
/// ```rust
/// use netdot_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::MissingRequiredField { field: "password" });
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_appends_trailing_slash() {
        let url = BaseUrl::new("http://localhost/netdot").unwrap();
        assert_eq!(url.as_ref(), "http://localhost/netdot/");

        let url = BaseUrl::new("http://localhost/netdot/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost/netdot/");
    }

    #[test]
    fn test_base_url_validates_format() {
        let url = BaseUrl::new("https://netdot.example.com:8443/netdot").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), "netdot.example.com");

        let url = BaseUrl::new("http://127.0.0.1:3000").unwrap();
        assert_eq!(url.host_name(), "127.0.0.1");
        assert_eq!(url.as_ref(), "http://127.0.0.1:3000/");
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(matches!(BaseUrl::new(""), Err(ConfigError::EmptyUrl)));
        assert!(BaseUrl::new("netdot.example.com").is_err());
        assert!(BaseUrl::new("https://").is_err());
        assert!(BaseUrl::new("://example.com").is_err());
        assert!(BaseUrl::new("https://example.com/netdot?x=1").is_err());
    }

    #[test]
    fn test_base_url_join_strips_leading_slash() {
        let url = BaseUrl::new("http://localhost/netdot").unwrap();
        assert_eq!(url.join("rest/Device/"), "http://localhost/netdot/rest/Device/");
        assert_eq!(url.join("/NetdotLogin"), "http://localhost/netdot/NetdotLogin");
    }

    #[test]
    fn test_base_url_deserializes_from_string() {
        let url: BaseUrl = serde_yaml::from_str("\"http://localhost/netdot\"").unwrap();
        assert_eq!(url.as_ref(), "http://localhost/netdot/");
    }

    #[test]
    fn test_username_rejects_empty_string() {
        assert!(matches!(
            Username::new("  "),
            Err(ConfigError::MissingRequiredField { field: "username" })
        ));
        assert_eq!(Username::new("admin").unwrap().as_ref(), "admin");
    }

    #[test]
    fn test_password_masks_value_in_debug() {
        let password = Password::new("super-secret").unwrap();
        let debug_output = format!("{:?}", password);
        assert_eq!(debug_output, "Password(*****)");
        assert!(!debug_output.contains("super-secret"));
    }
}
