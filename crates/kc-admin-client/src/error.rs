//! Admin client error types.
//!
//! Every operation fails with exactly one of three kinds:
//!
//! - [`AdminError::Validation`]: a required argument was empty. Raised before
//!   any request is sent.
//! - [`AdminError::Transport`]: the request could not be sent or the
//!   response could not be read. The status policy never ran.
//! - [`AdminError::Server`]: the server answered with a status other than
//!   the one the operation expects. The payload is kept verbatim.

use serde_json::Value;
use thiserror::Error;

/// Errors raised below the status-code policy.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP stack failure (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A JSON body could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response was well-formed JSON but not what the operation needs.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Failure reported by a custom transport.
    #[error("{0}")]
    Other(String),
}

/// Admin client error type.
#[derive(Debug, Error)]
pub enum AdminError {
    /// A required argument was missing or empty.
    #[error("validation error: {0}")]
    Validation(String),

    /// The request never produced an interpretable response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with an unexpected status.
    #[error("server error: {status} - {}", render_body(.body))]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body as sent by the server.
        body: Value,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AdminError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a validation error for an empty required argument.
    #[must_use]
    pub fn missing(argument: &str) -> Self {
        Self::Validation(format!("{argument} is missing"))
    }

    /// Creates a malformed response error.
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Transport(TransportError::MalformedResponse(msg.into()))
    }

    /// Creates a server error.
    #[must_use]
    pub const fn server(status: u16, body: Value) -> Self {
        Self::Server { status, body }
    }

    /// Checks if this error was raised locally before any request.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Checks if this is a transport error.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns the server status code, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Checks if the server answered 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Server { status: 404, .. })
    }

    /// Checks if the server answered 409.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Server { status: 409, .. })
    }

    /// Returns the human-readable message carried by a server error body.
    ///
    /// Keycloak uses `errorMessage` on most admin endpoints and the OAuth
    /// style `error_description` / `error` pair elsewhere. A plain string body
    /// is returned as is.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        let Self::Server { body, .. } = self else {
            return None;
        };
        match body {
            Value::String(s) => Some(s.as_str()),
            Value::Object(map) => ["errorMessage", "error_description", "error"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str)),
            _ => None,
        }
    }
}

fn render_body(body: &Value) -> String {
    match body {
        Value::Null => "<empty body>".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Result type for admin client operations.
pub type AdminResult<T> = Result<T, AdminError>;
