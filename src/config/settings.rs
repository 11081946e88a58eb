//! Loading client settings from a YAML file.
//!
//! The settings file lives at `~/.netdot.yaml` unless the
//! [`SETTINGS_ENV_VAR`] environment variable points elsewhere:
//!
//! ```yaml
//! url: https://netdot.example.com/netdot
//! username: admin
//! password: secret
//! kerberos: false
//! verify: true
//! ```

use super::{BaseUrl, NetdotConfig, Password, Username};
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings file location.
pub const SETTINGS_ENV_VAR: &str = "NETDOT_SETTINGS";

const SETTINGS_FILE_NAME: &str = ".netdot.yaml";

/// Raw values read from the settings file.
///
/// Every key is optional; missing keys fall back to the defaults
/// (`http://localhost/netdot`, `user`, `password`, no kerberos, verify TLS).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the Netdot installation.
    pub url: String,
    /// User name for the form login.
    pub username: String,
    /// Password for the form login.
    pub password: String,
    /// Use negotiated authentication instead of the form login.
    pub kerberos: bool,
    /// Verify TLS certificates.
    pub verify: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: "http://localhost/netdot".to_string(),
            username: "user".to_string(),
            password: "password".to_string(),
            kerberos: false,
            verify: true,
        }
    }
}

impl Settings {
    /// Returns the settings file path.
    ///
    /// Uses `$NETDOT_SETTINGS` when set, `~/.netdot.yaml` otherwise.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os(SETTINGS_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(SETTINGS_FILE_NAME)))
    }

    /// Loads the settings from [`Settings::default_path`].
    #[must_use]
    pub fn load() -> Self {
        Self::default_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Loads the settings from `path`.
    ///
    /// A missing file yields the defaults. A file that cannot be read or
    /// parsed is logged and also yields the defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "cannot read settings file");
                return Self::default();
            }
        };

        if contents.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str(&contents) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "cannot parse settings file");
                Self::default()
            }
        }
    }

    /// Converts the settings into a validated [`NetdotConfig`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the URL is invalid or, without kerberos,
    /// if the user name or password is empty.
    pub fn into_config(self) -> Result<NetdotConfig, ConfigError> {
        let builder = NetdotConfig::builder()
            .url(BaseUrl::new(self.url)?)
            .verify_tls(self.verify)
            .negotiate(self.kerberos);

        if self.kerberos {
            builder.build()
        } else {
            builder
                .username(Username::new(self.username)?)
                .password(Password::new(self.password)?)
                .build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("absent.yaml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url: https://netdot.example.com/netdot").unwrap();
        writeln!(file, "username: admin").unwrap();
        writeln!(file, "verify: false").unwrap();

        let settings = Settings::load_from(file.path());
        assert_eq!(settings.url, "https://netdot.example.com/netdot");
        assert_eq!(settings.username, "admin");
        assert_eq!(settings.password, "password");
        assert!(!settings.kerberos);
        assert!(!settings.verify);
    }

    #[test]
    fn test_invalid_yaml_yields_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url: [unterminated").unwrap();

        let settings = Settings::load_from(file.path());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_into_config_with_kerberos_skips_credentials() {
        let settings = Settings {
            username: String::new(),
            password: String::new(),
            kerberos: true,
            ..Settings::default()
        };

        let config = settings.into_config().unwrap();
        assert!(config.is_negotiate());
        assert_eq!(config.url().as_ref(), "http://localhost/netdot/");
    }

    #[test]
    fn test_into_config_rejects_bad_url() {
        let settings = Settings {
            url: "localhost".to_string(),
            ..Settings::default()
        };

        assert!(matches!(
            settings.into_config(),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }
}
