//! # Actions
//!
//! Everything that can happen in the composer becomes an `Action`.
//! User presses Ctrl+G? That's `Action::Submit`.
//! The service answers? That's `Action::GenerationFinished(outcome)`.
//!
//! `update()` takes the current state and an action, mutates the state, and
//! returns an `Effect` describing the I/O the adapter should perform next.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, SubmissionStatus};
use crate::core::tone::Tone;
use crate::generation::GenerationRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The email editor's contents changed.
    EditEmail(String),
    SetTone(Tone),
    CycleTone,
    /// User pressed the Generate trigger.
    Submit,
    /// The background request finished: the reply text or the user-facing error.
    GenerationFinished(Result<String, String>),
    /// User pressed the Copy trigger.
    CopyReply,
    /// The clipboard write finished.
    CopyFinished(Result<(), String>),
    /// Reset the form to an empty email and an idle status.
    ClearForm,
    Quit,
}

/// Side effect requested by `update()`, executed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    SpawnRequest(GenerationRequest),
    CopyToClipboard(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::EditEmail(text) => {
            app.email_content = text;
            Effect::None
        }
        Action::SetTone(tone) => {
            app.tone = tone;
            app.status_message = format!("Tone: {}", tone.label());
            Effect::None
        }
        Action::CycleTone => {
            app.tone = app.tone.next();
            app.status_message = format!("Tone: {}", app.tone.label());
            Effect::None
        }
        Action::Submit => {
            if !app.can_submit() {
                debug!(
                    "Submit ignored: status={:?}, email_empty={}",
                    app.status,
                    app.email_content.is_empty()
                );
                return Effect::None;
            }
            app.start_submit();
            info!("Submission started (tone={:?})", app.tone);
            Effect::SpawnRequest(GenerationRequest::new(app.email_content.clone(), app.tone))
        }
        Action::GenerationFinished(outcome) => {
            if !app.is_loading() {
                warn!("Generation outcome arrived with nothing in flight, ignoring");
                return Effect::None;
            }
            match outcome {
                Ok(reply) => {
                    info!("Submission succeeded ({} bytes)", reply.len());
                    app.on_success(reply);
                }
                Err(message) => {
                    info!("Submission failed");
                    app.on_failure(message);
                }
            }
            Effect::None
        }
        Action::CopyReply => {
            if !app.can_copy() {
                return Effect::None;
            }
            match &app.generated_reply {
                Some(reply) => Effect::CopyToClipboard(reply.clone()),
                None => Effect::None,
            }
        }
        Action::CopyFinished(result) => {
            app.status_message = match result {
                Ok(()) => String::from("Copied to clipboard"),
                Err(e) => {
                    warn!("Clipboard write failed: {}", e);
                    String::from("Copied (internal only)")
                }
            };
            Effect::None
        }
        Action::ClearForm => {
            if app.is_loading() {
                return Effect::None;
            }
            app.email_content.clear();
            app.generated_reply = None;
            app.error = None;
            app.status = SubmissionStatus::Idle;
            app.status_message = String::from("Cleared");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
