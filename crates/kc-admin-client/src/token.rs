//! Bearer token sources.
//!
//! Obtaining and refreshing tokens happens outside this crate. The client only
//! asks a [`TokenSource`] for the current token once per request and treats
//! the returned [`AccessToken`] as an immutable snapshot.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// An opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw bearer string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw bearer string.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[redacted]").finish()
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Supplies the bearer token bound to each outbound request.
pub trait TokenSource: Send + Sync {
    /// Returns the token to use for the next request.
    fn access_token(&self) -> AccessToken;
}

impl TokenSource for AccessToken {
    fn access_token(&self) -> AccessToken {
        self.clone()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    fn access_token(&self) -> AccessToken {
        (**self).access_token()
    }
}

/// A token slot that an external refresher can replace.
///
/// Clones share the same slot. Requests already in flight keep the snapshot
/// they were built with.
#[derive(Debug, Clone)]
pub struct SharedToken {
    inner: Arc<RwLock<AccessToken>>,
}

impl SharedToken {
    /// Creates a slot holding `token`.
    #[must_use]
    pub fn new(token: impl Into<AccessToken>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(token.into())),
        }
    }

    /// Replaces the stored token.
    pub fn replace(&self, token: impl Into<AccessToken>) {
        *self.inner.write() = token.into();
    }
}

impl TokenSource for SharedToken {
    fn access_token(&self) -> AccessToken {
        self.inner.read().clone()
    }
}
