//! # ResultPanel Component
//!
//! Shows the outcome of the latest submission:
//!
//! 1. **Failed**: the error banner
//! 2. **Succeeded**: the generated reply, read-only and scrollable
//! 3. **Loading**: a spinner
//! 4. **Idle**: a short hint
//!
//! The reply is rendered exactly as received (no trimming), so what the user
//! sees is what Ctrl+Y copies.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::SubmissionStatus;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Persistent scroll state for the reply view.
#[derive(Default)]
pub struct ResultPanelState {
    pub scroll_state: ScrollViewState,
    content_height: u16,
    viewport_height: u16,
}

impl ResultPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the offset within the rendered reply.
    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ResultPanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
            }
            _ => {}
        }
        None
    }
}

/// Rendered line count as a scroll height; saturates instead of wrapping.
fn content_height(line_count: usize) -> u16 {
    u16::try_from(line_count).unwrap_or(u16::MAX).max(1)
}

/// Transient render wrapper: props borrowed from `App` each frame.
pub struct ResultPanel<'a> {
    pub state: &'a mut ResultPanelState,
    pub status: SubmissionStatus,
    pub reply: Option<&'a str>,
    pub error: Option<&'a str>,
    pub spinner_frame: usize,
}

impl ResultPanel<'_> {
    fn render_message(frame: &mut Frame, area: Rect, title: &str, text: String, style: Style) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .title(title.to_string());
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_reply(&mut self, frame: &mut Frame, area: Rect, reply: &str) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(" Generated Reply ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if reply.is_empty() {
            let empty = Paragraph::new("The service returned an empty reply.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        // One column for the scrollbar
        let content_width = inner.width.saturating_sub(1).max(1);
        let paragraph = Paragraph::new(reply).wrap(Wrap { trim: false });
        let content_height = content_height(paragraph.line_count(content_width));

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

impl Component for ResultPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.status {
            SubmissionStatus::Failed => {
                let message = self.error.unwrap_or_default().to_string();
                let style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
                Self::render_message(frame, area, " Error ", format!("⚠ {message}"), style);
            }
            SubmissionStatus::Succeeded => {
                let reply = self.reply.unwrap_or_default();
                self.render_reply(frame, area, reply);
            }
            SubmissionStatus::Loading => {
                let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                let style = Style::default().fg(Color::Yellow);
                Self::render_message(
                    frame,
                    area,
                    " Generated Reply ",
                    format!("{spinner} Generating reply..."),
                    style,
                );
            }
            SubmissionStatus::Idle => {
                let style = Style::default().fg(Color::DarkGray);
                Self::render_message(
                    frame,
                    area,
                    " Generated Reply ",
                    "Your reply will appear here.".to_string(),
                    style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::FAILURE_MESSAGE;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(
        state: &mut ResultPanelState,
        status: SubmissionStatus,
        reply: Option<&str>,
        error: Option<&str>,
    ) -> String {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut panel = ResultPanel {
                    state,
                    status,
                    reply,
                    error,
                    spinner_frame: 0,
                };
                panel.render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_renders_reply_text() {
        let mut state = ResultPanelState::new();
        let text = render_to_text(
            &mut state,
            SubmissionStatus::Succeeded,
            Some("Sure, how about Friday?"),
            None,
        );
        assert!(text.contains("Generated Reply"));
        assert!(text.contains("Sure, how about Friday?"));
    }

    #[test]
    fn test_renders_error_banner() {
        let mut state = ResultPanelState::new();
        let text = render_to_text(
            &mut state,
            SubmissionStatus::Failed,
            None,
            Some(FAILURE_MESSAGE),
        );
        assert!(text.contains("Error"));
        assert!(text.contains("Failed to generate email reply."));
    }

    #[test]
    fn test_renders_loading_and_idle() {
        let mut state = ResultPanelState::new();
        let text = render_to_text(&mut state, SubmissionStatus::Loading, None, None);
        assert!(text.contains("Generating reply..."));
        let text = render_to_text(&mut state, SubmissionStatus::Idle, None, None);
        assert!(text.contains("Your reply will appear here."));
    }

    #[test]
    fn test_empty_reply_shows_notice() {
        let mut state = ResultPanelState::new();
        let text = render_to_text(&mut state, SubmissionStatus::Succeeded, Some(""), None);
        assert!(text.contains("empty reply"));
    }

    #[test]
    fn test_scroll_is_clamped_to_content() {
        let mut state = ResultPanelState::new();
        let long_reply = (1..=30).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        render_to_text(&mut state, SubmissionStatus::Succeeded, Some(&long_reply), None);

        for _ in 0..100 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        // 30 lines in an 8-row viewport
        assert_eq!(state.scroll_state.offset().y, 22);

        let text = render_to_text(&mut state, SubmissionStatus::Succeeded, Some(&long_reply), None);
        assert!(text.contains("line 30"));
    }

    #[test]
    fn test_content_height_saturates() {
        assert_eq!(content_height(0), 1);
        assert_eq!(content_height(30), 30);
        assert_eq!(content_height(70_000), u16::MAX);
    }
}
