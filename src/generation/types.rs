use log::debug;
use serde::{Serialize, Serializer};

use super::client::GenerationError;
use crate::core::tone::Tone;

/// The request body sent to the generation endpoint:
/// `{"emailContent": "...", "tone": "..."}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub email_content: String,
    #[serde(serialize_with = "serialize_tone")]
    pub tone: Tone,
}

impl GenerationRequest {
    pub fn new(email_content: impl Into<String>, tone: Tone) -> Self {
        Self {
            email_content: email_content.into(),
            tone,
        }
    }
}

fn serialize_tone<S: Serializer>(tone: &Tone, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(tone.wire_value())
}

/// Turns a response body into reply text.
///
/// The response shape isn't fixed, so this is lenient:
/// - a JSON string yields its decoded contents
/// - any other JSON value yields its compact serialization, object keys in
///   the order the service sent them
/// - anything that isn't JSON is returned verbatim
///
/// Only a body that isn't valid UTF-8 is rejected.
pub fn normalize_payload(body: &[u8]) -> Result<String, GenerationError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| GenerationError::Format(format!("response body is not UTF-8: {e}")))?;

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(serde_json::Value::String(s)) => Ok(s),
        Ok(value) => {
            debug!("Structured response payload, serializing to text");
            Ok(value.to_string())
        }
        Err(_) => Ok(text.to_string()),
    }
}
