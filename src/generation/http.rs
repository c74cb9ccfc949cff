//! HTTP generation client.
//!
//! Posts `{"emailContent", "tone"}` as JSON to a single endpoint and waits
//! for the whole body. No streaming, no auth, no retries.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::client::{GenerationClient, GenerationError};
use super::types::{GenerationRequest, normalize_payload};

pub struct HttpGenerationClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpGenerationClient {
    /// Creates a client for `endpoint`. `timeout` bounds the whole request;
    /// `None` waits indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!("Failed to build configured HTTP client ({e}), using defaults");
            reqwest::Client::new()
        });

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn network_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::Network(format!("request timed out: {e}"))
    } else {
        GenerationError::Network(e.to_string())
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        info!(
            "Generation request: endpoint={}, tone={:?}, email_len={}",
            self.endpoint,
            request.tone,
            request.email_content.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        debug!("Generation response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Generation service error: {} - {}", status.as_u16(), message);
            return Err(GenerationError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(network_error)?;
        debug!("Generation response body: {} bytes", body.len());

        normalize_payload(&body)
    }
}
