//! Establishing a session with the Netdot server.
//!
//! Two modes are supported:
//!
//! - **Password**: a form POST to `<base>/NetdotLogin`. Any status below 400
//!   counts as success and the returned `Set-Cookie` values become the session
//!   cookie. Redirects must not be followed, so the login answer itself is
//!   inspected.
//! - **Negotiate**: a plain GET of `<base>`, expected to succeed. The
//!   handshake itself happens outside this crate.

use crate::auth::{AuthError, AuthMode, Session};
use crate::config::{Credentials, NetdotConfig};
use reqwest::header::{HeaderMap, SET_COOKIE};

/// Path of the form login endpoint, relative to the base URL.
const LOGIN_PATH: &str = "NetdotLogin";

/// Page the login form redirects to.
const LOGIN_DESTINATION: &str = "index.html";

/// Establishes a new session.
///
/// `client` must be configured not to follow redirects.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] or
/// [`AuthError::NegotiationRejected`] when the server rejects the login, and
/// [`AuthError::Network`] on connection failures.
pub async fn login(client: &reqwest::Client, config: &NetdotConfig) -> Result<Session, AuthError> {
    match config.credentials() {
        Credentials::Password { username, password } => {
            let url = config.url().join(LOGIN_PATH);
            let form = [
                ("destination", LOGIN_DESTINATION),
                ("credential_0", username.as_ref()),
                ("credential_1", password.as_ref()),
                ("permanent_session", "1"),
            ];

            tracing::debug!(url = %url, username = %username, "logging in to Netdot");
            let response = client.post(&url).form(&form).send().await?;
            let status = response.status().as_u16();

            if status >= 400 {
                return Err(AuthError::InvalidCredentials {
                    username: username.to_string(),
                    status,
                });
            }

            tracing::info!(username = %username, status, "logged in to Netdot");
            Ok(Session::new(
                session_cookie(response.headers()),
                AuthMode::Password,
            ))
        }
        Credentials::Negotiate => {
            let url = config.url().to_string();
            tracing::debug!(url = %url, "negotiating Netdot session");
            let response = client.get(&url).send().await?;
            let status = response.status().as_u16();

            if status >= 400 {
                return Err(AuthError::NegotiationRejected { status });
            }

            tracing::info!(status, "negotiated Netdot session");
            Ok(Session::new(
                session_cookie(response.headers()),
                AuthMode::Negotiate,
            ))
        }
    }
}

/// Builds a `Cookie` header value from the `Set-Cookie` headers of a response.
///
/// Only the `name=value` part of each cookie is kept.
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies: Vec<&str> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .filter(|pair| pair.contains('='))
        .collect();

    if cookies.is_empty() {
        None
    } else {
        Some(cookies.join("; "))
    }
}
