//! Session state for an authenticated Netdot connection.

use chrono::{DateTime, Utc};

/// How a session was established.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// Form login against `NetdotLogin`.
    Password,
    /// Negotiated authentication.
    Negotiate,
}

/// An authenticated Netdot session.
///
/// The session carries the cookie returned by the login endpoint. The
/// `generation` counter increases every time the client logs in again, which
/// lets concurrent requests detect that another task already replaced an
/// expired session.
///
/// # Example
///
/// ```rust
/// use netdot_api::{AuthMode, Session};
///
/// let session = Session::new(Some("NETDOT_SESSION=abc".to_string()), AuthMode::Password);
/// assert!(session.is_active());
/// assert_eq!(session.cookie_header(), Some("NETDOT_SESSION=abc"));
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// The `Cookie` header value sent with every request, if any.
    pub cookie: Option<String>,

    /// How this session was established.
    pub mode: AuthMode,

    /// When the session was established.
    pub created_at: DateTime<Utc>,

    /// Login counter of the owning client.
    pub generation: u64,
}

impl Session {
    /// Creates a new session established now.
    #[must_use]
    pub fn new(cookie: Option<String>, mode: AuthMode) -> Self {
        Self {
            cookie,
            mode,
            created_at: Utc::now(),
            generation: 0,
        }
    }

    /// Returns the session with the given login generation.
    #[must_use]
    pub const fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Returns the value for the `Cookie` request header.
    #[must_use]
    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie.as_deref().filter(|cookie| !cookie.is_empty())
    }

    /// Returns `true` if the session can authenticate requests.
    ///
    /// Negotiated sessions are always active; password sessions need a cookie.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self.mode {
            AuthMode::Negotiate => true,
            AuthMode::Password => self.cookie_header().is_some(),
        }
    }
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_session_needs_cookie() {
        let session = Session::new(None, AuthMode::Password);
        assert!(!session.is_active());

        let session = Session::new(Some(String::new()), AuthMode::Password);
        assert!(!session.is_active());
        assert!(session.cookie_header().is_none());
    }

    #[test]
    fn test_negotiate_session_is_always_active() {
        let session = Session::new(None, AuthMode::Negotiate);
        assert!(session.is_active());
    }

    #[test]
    fn test_with_generation() {
        let session = Session::new(Some("a=b".to_string()), AuthMode::Password).with_generation(3);
        assert_eq!(session.generation, 3);
    }
}
