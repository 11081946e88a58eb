//! Configuration types for the Netdot API client.
//!
//! This module provides the configuration types used to connect to a Netdot
//! server.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`NetdotConfig`]: The main configuration struct holding all client settings
//! - [`NetdotConfigBuilder`]: A builder for constructing [`NetdotConfig`] instances
//! - [`BaseUrl`]: A validated base URL of the Netdot installation
//! - [`Username`]: A validated user name
//! - [`Password`]: A password with masked debug output
//! - [`Settings`]: The on-disk settings file (`~/.netdot.yaml`)
//!
//! # Example
//!
//! ```rust
//! use netdot_api::{NetdotConfig, BaseUrl, Username, Password};
//!
//! let config = NetdotConfig::builder()
//!     .url(BaseUrl::new("https://netdot.example.com/netdot").unwrap())
//!     .username(Username::new("admin").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod settings;

pub use newtypes::{BaseUrl, Password, Username};
pub use settings::{Settings, SETTINGS_ENV_VAR};

use crate::error::ConfigError;
use std::time::Duration;

/// How the client authenticates against the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Form login with a user name and password.
    Password {
        /// The Netdot user name.
        username: Username,
        /// The Netdot password.
        password: Password,
    },
    /// Negotiated (Kerberos) authentication handled outside this crate.
    Negotiate,
}

/// Configuration for the Netdot API client.
///
/// # Thread Safety
///
/// `NetdotConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use netdot_api::{NetdotConfig, BaseUrl};
///
/// let config = NetdotConfig::builder()
///     .url(BaseUrl::new("https://netdot.example.com/netdot").unwrap())
///     .negotiate(true)
///     .verify_tls(false)
///     .build()
///     .unwrap();
///
/// assert!(config.is_negotiate());
/// assert!(!config.verify_tls());
/// ```
#[derive(Clone, Debug)]
pub struct NetdotConfig {
    url: BaseUrl,
    credentials: Credentials,
    verify_tls: bool,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NetdotConfig {
    /// Creates a new builder for constructing a `NetdotConfig`.
    #[must_use]
    pub fn builder() -> NetdotConfigBuilder {
        NetdotConfigBuilder::new()
    }

    /// Returns the base URL of the Netdot installation.
    #[must_use]
    pub const fn url(&self) -> &BaseUrl {
        &self.url
    }

    /// Returns the configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns whether negotiated authentication is used.
    #[must_use]
    pub const fn is_negotiate(&self) -> bool {
        matches!(self.credentials, Credentials::Negotiate)
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the default request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify NetdotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NetdotConfig>();
};

/// Builder for constructing [`NetdotConfig`] instances.
///
/// `url` is always required. `username` and `password` are required unless
/// negotiated authentication is enabled.
///
/// # Defaults
///
/// - `verify_tls`: `true`
/// - `negotiate`: `false`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None`
#[derive(Debug, Default)]
pub struct NetdotConfigBuilder {
    url: Option<BaseUrl>,
    username: Option<Username>,
    password: Option<Password>,
    negotiate: bool,
    verify_tls: Option<bool>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl NetdotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn url(mut self, url: BaseUrl) -> Self {
        self.url = Some(url);
        self
    }

    /// Sets the user name.
    #[must_use]
    pub fn username(mut self, username: Username) -> Self {
        self.username = Some(username);
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Enables negotiated authentication instead of the form login.
    #[must_use]
    pub const fn negotiate(mut self, negotiate: bool) -> Self {
        self.negotiate = negotiate;
        self
    }

    /// Sets whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = Some(verify);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the default timeout applied to every request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`NetdotConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `url` is not set, or
    /// if `username`/`password` are not set while negotiation is disabled.
    pub fn build(self) -> Result<NetdotConfig, ConfigError> {
        let url = self
            .url
            .ok_or(ConfigError::MissingRequiredField { field: "url" })?;

        let credentials = if self.negotiate {
            Credentials::Negotiate
        } else {
            let username = self
                .username
                .ok_or(ConfigError::MissingRequiredField { field: "username" })?;
            let password = self
                .password
                .ok_or(ConfigError::MissingRequiredField { field: "password" })?;
            Credentials::Password { username, password }
        };

        Ok(NetdotConfig {
            url,
            credentials,
            verify_tls: self.verify_tls.unwrap_or(true),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("http://localhost/netdot").unwrap()
    }

    #[test]
    fn test_builder_requires_url() {
        let result = NetdotConfigBuilder::new()
            .username(Username::new("user").unwrap())
            .password(Password::new("pass").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "url" })
        ));
    }

    #[test]
    fn test_builder_requires_credentials_without_negotiate() {
        let result = NetdotConfig::builder()
            .url(base_url())
            .password(Password::new("pass").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "username" })
        ));

        let result = NetdotConfig::builder()
            .url(base_url())
            .username(Username::new("user").unwrap())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "password" })
        ));
    }

    #[test]
    fn test_negotiate_does_not_need_credentials() {
        let config = NetdotConfig::builder()
            .url(base_url())
            .negotiate(true)
            .build()
            .unwrap();

        assert!(config.is_negotiate());
        assert_eq!(config.credentials(), &Credentials::Negotiate);
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = NetdotConfig::builder()
            .url(base_url())
            .username(Username::new("user").unwrap())
            .password(Password::new("pass").unwrap())
            .build()
            .unwrap();

        assert!(config.verify_tls());
        assert!(!config.is_negotiate());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_config_debug_hides_password() {
        let config = NetdotConfig::builder()
            .url(base_url())
            .username(Username::new("user").unwrap())
            .password(Password::new("hunter2").unwrap())
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("inventory-sync/2.0")
            .build()
            .unwrap();

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("NetdotConfig"));
        assert!(!debug_str.contains("hunter2"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent_prefix(), Some("inventory-sync/2.0"));
    }
}
