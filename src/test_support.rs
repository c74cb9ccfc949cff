//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::state::App;
use crate::core::tone::Tone;
use crate::generation::{GenerationClient, GenerationError, GenerationRequest};

/// A fake client that answers every request with the same scripted outcome
/// and records what it was asked.
pub struct ScriptedClient {
    outcome: Result<String, GenerationError>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedClient {
    pub fn replying(reply: &str) -> Self {
        Self {
            outcome: Ok(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self {
            outcome: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.outcome.clone()
    }
}

/// Creates a test App whose client always replies "test reply".
pub fn test_app() -> App {
    App::new(Arc::new(ScriptedClient::replying("test reply")), Tone::None)
}
