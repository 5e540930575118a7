//! HTTP transport abstraction.
//!
//! The client hands a fully built [`RequestDescriptor`] to an
//! [`HttpTransport`] and gets back the status, headers, and raw body. Anything
//! below that line (pooling, TLS, socket-level retries) belongs to the
//! transport. [`reqwest::Client`] implements the trait out of the box.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, LOCATION};
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::error::TransportError;
use crate::token::AccessToken;

/// Everything needed to send one admin request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method.
    pub method: Method,
    /// Absolute target URL.
    pub url: Url,
    /// Bearer credential for the `Authorization` header.
    pub bearer: AccessToken,
    /// Optional request body.
    pub body: Option<Value>,
    /// Whether to negotiate JSON (`Accept` and `Content-Type` headers).
    pub json: bool,
}

/// What the transport got back.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns the `Location` header, if present and valid UTF-8.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }
}

/// Sends request descriptors over the wire.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends one request and returns the raw response.
    ///
    /// Implementations must not retry and must not interpret the status.
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl HttpTransport for reqwest::Client {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .request(request.method, request.url)
            .bearer_auth(request.bearer.secret());

        if request.json {
            builder = builder.header(ACCEPT, "application/json");
        }

        if let Some(body) = request.body {
            builder = if request.json {
                builder.json(&body)
            } else {
                builder.body(serde_json::to_vec(&body)?)
            };
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
