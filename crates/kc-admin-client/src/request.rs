//! Authenticated request building and response interpretation.
//!
//! An [`AdminRequest`] describes one call below `{base}/admin/realms`: method,
//! path segments, query, optional JSON body, whether to negotiate JSON, and
//! the single status code that counts as success. [`crate::AdminClient`]
//! binds a token snapshot to it, sends it once, and interprets the outcome
//! with [`AdminRequest::interpret`].

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::{AdminError, AdminResult, TransportError};
use crate::transport::TransportResponse;

/// Description of one admin API call.
#[derive(Debug, Clone)]
pub struct AdminRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    json: bool,
    expected_status: u16,
}

impl AdminRequest {
    /// Creates a request with an explicit expected status.
    #[must_use]
    pub fn new(method: Method, expected_status: u16) -> Self {
        Self {
            method,
            segments: Vec::new(),
            query: Vec::new(),
            body: None,
            json: true,
            expected_status,
        }
    }

    /// `GET`, expecting 200.
    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::GET, 200)
    }

    /// `POST`, expecting 201.
    #[must_use]
    pub fn post() -> Self {
        Self::new(Method::POST, 201)
    }

    /// `PUT`, expecting 204.
    #[must_use]
    pub fn put() -> Self {
        Self::new(Method::PUT, 204)
    }

    /// `DELETE`, expecting 204.
    #[must_use]
    pub fn delete() -> Self {
        Self::new(Method::DELETE, 204)
    }

    /// Appends one path segment. Segments are percent-encoded when the URL
    /// is built, so values containing `/` or spaces stay a single segment.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends several path segments.
    #[must_use]
    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query parameter when `value` is set.
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Sets the JSON body.
    pub fn body<T: Serialize + ?Sized>(mut self, body: &T) -> AdminResult<Self> {
        let value = serde_json::to_value(body).map_err(TransportError::from)?;
        self.body = Some(value);
        Ok(self)
    }

    /// Turns JSON negotiation on or off. On by default.
    ///
    /// With negotiation off the request carries no `Accept: application/json`
    /// header and a successful response body is returned as a string.
    #[must_use]
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Overrides the expected success status.
    #[must_use]
    pub fn expect(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the expected success status.
    #[must_use]
    pub const fn expected_status(&self) -> u16 {
        self.expected_status
    }

    /// Returns whether JSON is negotiated.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub(crate) fn take_body(&mut self) -> Option<Value> {
        self.body.take()
    }

    /// Builds the absolute URL under `{base}/admin/realms`.
    pub fn url(&self, base: &Url) -> Result<Url, TransportError> {
        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                TransportError::Other(format!("base URL cannot carry a path: {base}"))
            })?;
            path.pop_if_empty()
                .extend(["admin", "realms"])
                .extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }

    /// Applies the status policy to a transport response.
    ///
    /// The expected status yields the parsed body (empty bodies become
    /// `null`). Any other status yields [`AdminError::Server`] with the body
    /// as sent by the server.
    pub fn interpret(&self, response: &TransportResponse) -> AdminResult<Value> {
        if response.status == self.expected_status {
            parse_success_body(&response.body, self.json)
        } else {
            Err(AdminError::server(
                response.status,
                parse_error_body(&response.body),
            ))
        }
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

fn parse_success_body(body: &[u8], json: bool) -> AdminResult<Value> {
    if is_blank(body) {
        return Ok(Value::Null);
    }
    if json {
        let value = serde_json::from_slice(body).map_err(TransportError::from)?;
        Ok(value)
    } else {
        Ok(Value::String(String::from_utf8_lossy(body).into_owned()))
    }
}

/// Error bodies are kept whatever their shape: JSON when it parses,
/// otherwise the raw text.
fn parse_error_body(body: &[u8]) -> Value {
    if is_blank(body) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

/// Rejects an empty required argument.
pub(crate) fn require(value: &str, argument: &str) -> AdminResult<()> {
    if value.trim().is_empty() {
        Err(AdminError::missing(argument))
    } else {
        Ok(())
    }
}

/// Extracts the identifier of a created entity from the last path segment
/// of a `Location` header.
pub(crate) fn id_from_location(location: Option<&str>) -> AdminResult<String> {
    let location =
        location.ok_or_else(|| AdminError::malformed("create response has no Location header"))?;
    let url = Url::parse(location)
        .map_err(|e| AdminError::malformed(format!("invalid Location header '{location}': {e}")))?;
    url.path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .map(|id| {
            urlencoding::decode(id)
                .map_or_else(|_| id.to_string(), std::borrow::Cow::into_owned)
        })
        .ok_or_else(|| AdminError::malformed(format!("Location header has no id: {location}")))
}
