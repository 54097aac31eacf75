//! HTTP transport implementation
//!
//! JSON POST to the assistant service's chat endpoint. No retry or backoff
//! here; a failure is reported once and the widget recovers locally.

use super::{ChatRequest, ChatResponse, Transport, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport backed by an HTTP chat service
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport for the given endpoint, e.g.
    /// `http://localhost:8000/chat/`.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    TransportError::network(e.to_string())
                } else {
                    TransportError::http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::http(format!(
                "chat endpoint returned {status}"
            )));
        }

        response
            .json::<ChatResponse>()
            .await
            .map_err(|e| TransportError::decode(e.to_string()))
    }
}
