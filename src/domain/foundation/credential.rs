//! Bearer credential held for the current session.
//!
//! The token is opaque: no structure is imposed beyond "non-empty means
//! authenticated". It is wrapped in [`Secret`] so it never shows up in
//! `Debug` output or logs.

use secrecy::{ExposeSecret, Secret};

/// Opaque bearer token identifying an authenticated session.
#[derive(Clone)]
pub struct Credential(Secret<String>);

impl Credential {
    /// Wraps a token as issued by the login endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// The credential of a session that has not logged in.
    pub fn anonymous() -> Self {
        Self::new(String::new())
    }

    /// Returns true when a token is held.
    pub fn is_authenticated(&self) -> bool {
        !self.0.expose_secret().is_empty()
    }

    /// Exposes the raw token, for building the authorization header only.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Header value to send, `None` when anonymous.
    pub fn authorization(&self) -> Option<&str> {
        if self.is_authenticated() {
            Some(self.expose())
        } else {
            None
        }
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_authenticated() {
            write!(f, "Credential([REDACTED])")
        } else {
            write!(f, "Credential(anonymous)")
        }
    }
}

impl PartialEq for Credential {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Credential {}
