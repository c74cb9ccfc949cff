//! # ActionBar Component
//!
//! One line of triggers under the form. Stateless; every field is a prop.
//!
//! - Generate is dimmed while unavailable (empty email or request in flight)
//!   and replaced by a spinner while loading.
//! - Copy only appears when there is a reply to copy.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::tone::Tone;
use crate::tui::component::Component;
use crate::tui::components::result_panel::SPINNER_FRAMES;

pub struct ActionBar {
    pub tone: Tone,
    pub can_submit: bool,
    pub is_loading: bool,
    pub can_copy: bool,
    pub spinner_frame: usize,
}

impl ActionBar {
    fn key_style() -> Style {
        Style::default().fg(Color::Black).bg(Color::Gray)
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(" Tab ", Self::key_style()),
            Span::raw(" Tone: "),
            Span::styled(
                self.tone.label(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ];

        if self.is_loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            spans.push(Span::styled(
                format!("{spinner} Generating..."),
                Style::default().fg(Color::Yellow),
            ));
        } else {
            let generate_style = if self.can_submit {
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(" ^G ", Self::key_style()));
            spans.push(Span::styled(" Generate Reply", generate_style));
        }

        if self.can_copy {
            spans.push(Span::raw("   "));
            spans.push(Span::styled(" ^Y ", Self::key_style()));
            spans.push(Span::styled(" Copy to Clipboard", Style::default().fg(Color::Green)));
        }

        Line::from(spans)
    }
}

impl Component for ActionBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(bar: &ActionBar) -> String {
        bar.line().spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn bar() -> ActionBar {
        ActionBar {
            tone: Tone::Professional,
            can_submit: true,
            is_loading: false,
            can_copy: false,
            spinner_frame: 0,
        }
    }

    #[test]
    fn test_shows_generate_and_tone() {
        let text = text_of(&bar());
        assert!(text.contains("Generate Reply"));
        assert!(text.contains("Tone: Professional"));
        assert!(!text.contains("Copy"));
    }

    #[test]
    fn test_loading_replaces_generate_with_spinner() {
        let text = text_of(&ActionBar {
            is_loading: true,
            can_submit: false,
            ..bar()
        });
        assert!(text.contains("Generating..."));
        assert!(!text.contains("Generate Reply"));
    }

    #[test]
    fn test_disabled_generate_is_dimmed() {
        let line = ActionBar {
            can_submit: false,
            ..bar()
        }
        .line();
        let span = line
            .spans
            .iter()
            .find(|s| s.content.contains("Generate Reply"))
            .unwrap();
        assert!(span.style.add_modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_copy_only_with_reply() {
        let text = text_of(&ActionBar {
            can_copy: true,
            ..bar()
        });
        assert!(text.contains("Copy to Clipboard"));
    }
}
