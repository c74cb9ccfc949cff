//! # Tone Picker Component
//!
//! Overlay for choosing the reply tone. Opened with Ctrl+T.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `TonePickerState` lives in `TuiState`
//! - `TonePicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::core::tone::Tone;
use crate::tui::event::TuiEvent;

/// Persistent state for the tone picker overlay.
pub struct TonePickerState {
    pub selected: usize,
    pub list_state: ListState,
}

impl TonePickerState {
    /// Opens the picker with the current tone highlighted.
    pub fn new(current: Tone) -> Self {
        let selected = current.index();
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            selected,
            list_state,
        }
    }

    /// Handle a key event, returning a TonePickerEvent if the overlay should act.
    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<TonePickerEvent> {
        match event {
            TuiEvent::Escape => Some(TonePickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(Tone::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Submit => Tone::ALL.get(self.selected).copied().map(TonePickerEvent::Select),
            _ => None,
        }
    }
}

/// Events emitted by the tone picker.
#[derive(Debug, PartialEq)]
pub enum TonePickerEvent {
    Select(Tone),
    Dismiss,
}

/// Transient render wrapper for the tone picker overlay.
pub struct TonePicker<'a> {
    state: &'a mut TonePickerState,
    current: Tone,
}

impl<'a> TonePicker<'a> {
    pub fn new(state: &'a mut TonePickerState, current: Tone) -> Self {
        Self { state, current }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, Tone::ALL.len() as u16 + 2, area);

        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Tone (Optional) ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = Tone::ALL
            .iter()
            .enumerate()
            .map(|(i, tone)| {
                let marker = if *tone == self.current { " *" } else { "" };
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if *tone == self.current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(tone.label(), style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// A rect `percent_x` wide and `height` rows tall, centered in `outer`.
fn centered_rect(percent_x: u16, height: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(outer.height)),
        Constraint::Fill(1),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
