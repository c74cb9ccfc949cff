//! # Submission Controller
//!
//! The asynchronous half of a submission. `update()` decides *whether* a
//! request goes out and moves the state to loading; this module performs the
//! request and collapses every failure into the one message users see.
//!
//! The typed error only reaches the log.

use log::{error, info};

use crate::core::state::FAILURE_MESSAGE;
use crate::core::tone::Tone;
use crate::generation::{GenerationClient, GenerationRequest};

/// Runs one request/response cycle against `client`. The event loop calls
/// this for every request `update()` lets through.
///
/// Returns the normalized reply, or [`FAILURE_MESSAGE`] on any failure.
pub async fn submit(
    client: &dyn GenerationClient,
    email_content: &str,
    tone: Tone,
) -> Result<String, String> {
    let request = GenerationRequest::new(email_content, tone);
    match client.generate(&request).await {
        Ok(reply) => {
            info!("Reply received from {} ({} bytes)", client.name(), reply.len());
            Ok(reply)
        }
        Err(e) => {
            error!("Reply generation via {} failed: {}", client.name(), e);
            Err(FAILURE_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationError;
    use crate::test_support::ScriptedClient;

    #[tokio::test]
    async fn test_submit_passes_reply_through() {
        let client = ScriptedClient::replying("Sure, how about Friday?");
        let result = submit(&client, "Can we reschedule?", Tone::Professional).await;
        assert_eq!(result, Ok("Sure, how about Friday?".to_string()));

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].email_content, "Can we reschedule?");
        assert_eq!(requests[0].tone, Tone::Professional);
    }

    #[tokio::test]
    async fn test_every_error_kind_maps_to_fixed_message() {
        let errors = [
            GenerationError::Network("request timed out".to_string()),
            GenerationError::Service {
                status: 500,
                message: "stack trace".to_string(),
            },
            GenerationError::Format("not utf-8".to_string()),
        ];
        for err in errors {
            let client = ScriptedClient::failing(err);
            let result = submit(&client, "Hi", Tone::None).await;
            assert_eq!(result, Err(FAILURE_MESSAGE.to_string()));
        }
    }
}
