use std::fmt;

use async_trait::async_trait;

use super::types::GenerationRequest;

/// Errors that can occur while asking the service for a reply.
/// None of these are shown to the user verbatim; they end up in the log.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// Network-level failure (timeout, DNS, connection refused, body read).
    Network(String),
    /// The service answered with a non-success status code.
    Service { status: u16, message: String },
    /// The response body could not be turned into text.
    Format(String),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Network(msg) => write!(f, "network error: {msg}"),
            GenerationError::Service { status, message } => {
                write!(f, "service error (HTTP {status}): {message}")
            }
            GenerationError::Format(msg) => write!(f, "format error: {msg}"),
        }
    }
}

impl std::error::Error for GenerationError {}

#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Returns the name of the client, for logging.
    fn name(&self) -> &str;

    /// Sends one request and waits for the complete, normalized reply text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = GenerationError::Service {
            status: 503,
            message: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "service error (HTTP 503): busy");
    }

    #[test]
    fn test_display_network_and_format() {
        assert_eq!(
            GenerationError::Network("timed out".to_string()).to_string(),
            "network error: timed out"
        );
        assert!(GenerationError::Format("bad utf-8".to_string())
            .to_string()
            .starts_with("format error"));
    }
}
