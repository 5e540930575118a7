//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::header::{HeaderValue, LOCATION};
use serde_json::Value;

use crate::error::TransportError;
use crate::transport::{HttpTransport, RequestDescriptor, TransportResponse};

#[derive(Default)]
struct State {
    responses: VecDeque<Result<TransportResponse, String>>,
    requests: Vec<RequestDescriptor>,
}

/// Replays queued responses in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&self, response: Result<TransportResponse, String>) {
        self.state.lock().responses.push_back(response);
    }

    pub(crate) fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(TransportResponse {
            status,
            body: body.to_string().into_bytes(),
            ..TransportResponse::default()
        }));
    }

    pub(crate) fn push_empty(&self, status: u16) {
        self.push(Ok(TransportResponse {
            status,
            ..TransportResponse::default()
        }));
    }

    pub(crate) fn push_created(&self, location: &'static str) {
        let mut response = TransportResponse {
            status: 201,
            ..TransportResponse::default()
        };
        response
            .headers
            .insert(LOCATION, HeaderValue::from_static(location));
        self.push(Ok(response));
    }

    pub(crate) fn push_error(&self, message: &str) {
        self.push(Err(message.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<RequestDescriptor> {
        self.state.lock().requests.clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.lock().requests.len()
    }

    fn record(&self, request: RequestDescriptor) -> Result<TransportResponse, TransportError> {
        let mut state = self.state.lock();
        state.requests.push(request);
        match state.responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::Other(message)),
            None => Err(TransportError::Other("no response queued".to_string())),
        }
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<TransportResponse, TransportError> {
        self.record(request)
    }
}
