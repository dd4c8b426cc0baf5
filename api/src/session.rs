//! Explicit authentication context.
//!
//! The session is injected into the client rather than read from ambient
//! storage on every request: callers obtain a token through a login
//! endpoint, wrap it in a [`Session`] with an optional expiry, and hand it
//! to [`crate::ApiClient::authorize`]. An expired session fails locally with
//! [`crate::ApiError::SessionExpired`] before any request is sent.

use chrono::{DateTime, Utc};

/// A bearer token plus its expiry policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The bearer token as issued by the login endpoint
    pub token: String,
    /// When the token stops being usable; `None` means no local expiry
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session with no local expiry
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    /// Create a session that expires at the given instant
    #[must_use]
    pub fn expiring(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Whether the session is past its expiry at `now`
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| now >= expiry)
    }
}
