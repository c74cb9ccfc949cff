//! # TitleBar Component
//!
//! Top status line: app name, submission status, endpoint, and the transient
//! status message.
//!
//! Stateless. All fields are props; it renders whatever it is given:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(SubmissionStatus::Idle, "localhost:8080", "Cleared");
//! title_bar.render(frame, area);
//! ```
//!
//! Layout: `MailGenie [Idle] localhost:8080 | Cleared`. The status message is
//! dropped when empty.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::state::SubmissionStatus;
use crate::tui::component::Component;

pub struct TitleBar {
    pub status: SubmissionStatus,
    /// Where requests go, shortened for display
    pub endpoint: String,
    /// Transient message (e.g. "Copied to clipboard")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        status: SubmissionStatus,
        endpoint: impl Into<String>,
        status_message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            endpoint: endpoint.into(),
            status_message: status_message.into(),
        }
    }

    fn status_color(&self) -> Color {
        match self.status {
            SubmissionStatus::Idle => Color::Gray,
            SubmissionStatus::Loading => Color::Yellow,
            SubmissionStatus::Succeeded => Color::Green,
            SubmissionStatus::Failed => Color::Red,
        }
    }
}

/// Strips the scheme and path so only `host[:port]` is shown.
pub fn display_endpoint(url: &str) -> &str {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "MailGenie ✨ ",
                Style::default().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", self.status.label()),
                Style::default().fg(self.status_color()),
            ),
            Span::styled(
                format!(" {}", self.endpoint),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let mut title_bar =
            TitleBar::new(SubmissionStatus::Loading, "localhost:8080", "Generating reply...");
        let text = render_text(&mut title_bar);

        assert!(text.contains("MailGenie"));
        assert!(text.contains("[Generating]"));
        assert!(text.contains("localhost:8080"));
        assert!(text.contains("Generating reply..."));
    }

    #[test]
    fn test_title_bar_without_status_message() {
        let mut title_bar = TitleBar::new(SubmissionStatus::Idle, "localhost:8080", "");
        let text = render_text(&mut title_bar);

        assert!(text.contains("[Idle]"));
        assert!(!text.contains('|'));
    }

    #[test]
    fn test_display_endpoint() {
        assert_eq!(
            display_endpoint("http://localhost:8080/api/email/generate"),
            "localhost:8080"
        );
        assert_eq!(display_endpoint("https://example.com"), "example.com");
        assert_eq!(display_endpoint("example.com/path"), "example.com");
    }
}
