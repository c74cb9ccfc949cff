//! # Application State
//!
//! Everything the composer knows, in one struct. No TUI-specific types here;
//! presentation state (cursor, scroll, overlays) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn GenerationClient>  // reply service
//! ├── email_content: String              // message being replied to
//! ├── tone: Tone                         // advisory style hint
//! ├── status: SubmissionStatus           // idle | loading | succeeded | failed
//! ├── generated_reply: Option<String>    // only while succeeded
//! ├── error: Option<String>              // only while failed
//! └── status_message: String             // title bar text
//! ```
//!
//! The submission lifecycle only moves through `start_submit`, `on_success`
//! and `on_failure`, and those are only called from `update()` in action.rs.

use std::sync::Arc;

use crate::core::tone::Tone;
use crate::generation::GenerationClient;

/// Fixed, user-safe message shown for every kind of generation failure.
pub const FAILURE_MESSAGE: &str = "Failed to generate email reply. Please try again.";

pub const WELCOME_MESSAGE: &str = "Paste an email, pick a tone, press Ctrl+G";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Idle",
            SubmissionStatus::Loading => "Generating",
            SubmissionStatus::Succeeded => "Done",
            SubmissionStatus::Failed => "Failed",
        }
    }
}

pub struct App {
    pub client: Arc<dyn GenerationClient>,
    pub email_content: String,
    pub tone: Tone,
    pub status: SubmissionStatus,
    pub generated_reply: Option<String>,
    pub error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(client: Arc<dyn GenerationClient>, tone: Tone) -> Self {
        Self {
            client,
            email_content: String::new(),
            tone,
            status: SubmissionStatus::Idle,
            generated_reply: None,
            error: None,
            status_message: String::from(WELCOME_MESSAGE),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    /// The submit trigger is available only with some email content and
    /// nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.email_content.is_empty() && !self.is_loading()
    }

    /// The copy trigger is available only while a reply is showing.
    pub fn can_copy(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
            && self.generated_reply.as_deref().is_some_and(|r| !r.is_empty())
    }

    /// idle/succeeded/failed → loading. Drops the previous error and the
    /// previous reply.
    pub fn start_submit(&mut self) {
        self.status = SubmissionStatus::Loading;
        self.error = None;
        self.generated_reply = None;
        self.status_message = String::from("Generating reply...");
    }

    /// loading → succeeded
    pub fn on_success(&mut self, reply: String) {
        self.status = SubmissionStatus::Succeeded;
        self.error = None;
        self.generated_reply = Some(reply);
        self.status_message = String::from("Reply ready. Ctrl+Y to copy");
    }

    /// loading → failed
    pub fn on_failure(&mut self, message: String) {
        self.status = SubmissionStatus::Failed;
        self.generated_reply = None;
        self.error = Some(message);
        self.status_message = String::from("Generation failed");
    }
}
