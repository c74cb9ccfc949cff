//! # EmailEditor Component
//!
//! Multi-line text area holding the email being replied to.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste, and newlines (Enter)
//! - Handle editing (backspace, delete, cursor movement)
//! - Keep the cursor row visible by scrolling
//!
//! ## State Management
//!
//! The buffer is internal state; the parent mirrors it into the core `App`
//! whenever `EditorEvent::Changed` is emitted. `dimmed` is a prop set while a
//! request is in flight.

mod layout;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use layout::{
    VERTICAL_OVERHEAD, inner_width, locate, next_char_boundary, offset_at_column,
    prev_char_boundary, wrap_rows,
};

/// High-level events emitted by the EmailEditor
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The text changed; the parent should sync it into the app state.
    Changed,
    /// Only the cursor moved.
    Moved,
}

pub struct EmailEditor {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether to render the editor de-emphasized (Prop)
    pub dimmed: bool,
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    cursor: usize,
    /// First visible row
    scroll_offset: u16,
    /// Inner width from the last render, used for vertical movement
    last_inner_width: u16,
}

impl Default for EmailEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailEditor {
    const DEFAULT_WIDTH: u16 = 78;

    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            dimmed: false,
            cursor: 0,
            scroll_offset: 0,
            last_inner_width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Moves the cursor one display row up (-1) or down (+1), keeping the column.
    fn move_vertically(&mut self, direction: i8) -> bool {
        let rows = wrap_rows(&self.buffer, self.last_inner_width);
        let (row, col) = locate(&self.buffer, &rows, self.cursor);
        let target = match direction {
            d if d < 0 && row > 0 => row - 1,
            d if d > 0 && row + 1 < rows.len() => row + 1,
            _ => return false,
        };
        self.cursor = offset_at_column(&self.buffer, rows[target], col);
        true
    }

    /// Adjusts `scroll_offset` so the cursor row is within `visible` rows.
    fn update_scroll_offset(&mut self, cursor_row: u16, total_rows: u16, visible: u16) {
        let visible = visible.max(1);
        if cursor_row < self.scroll_offset {
            self.scroll_offset = cursor_row;
        } else if cursor_row >= self.scroll_offset.saturating_add(visible) {
            self.scroll_offset = cursor_row.saturating_add(1).saturating_sub(visible);
        }
        let max_offset = total_rows.saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

impl Component for EmailEditor {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.last_inner_width = width;
        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD);

        let rows = wrap_rows(&self.buffer, width);
        let (cursor_row, cursor_col) = locate(&self.buffer, &rows, self.cursor);
        let cursor_row = u16::try_from(cursor_row).unwrap_or(u16::MAX);
        let total_rows = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        self.update_scroll_offset(cursor_row, total_rows, visible);

        let lines: Vec<Line> = rows
            .iter()
            .skip(self.scroll_offset as usize)
            .take(visible as usize)
            .map(|row| Line::raw(&self.buffer[row.start..row.end]))
            .collect();

        let mut style = Style::default().fg(Color::White);
        if self.dimmed {
            style = style.add_modifier(Modifier::DIM);
        }
        let title = if self.buffer.is_empty() {
            " Original Email (empty) "
        } else {
            " Original Email "
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);

        frame.render_widget(Paragraph::new(lines).block(block).style(style), area);

        if visible > 0 {
            let x = area.x + 1 + cursor_col.min(width.saturating_sub(1));
            let y = area.y + 1 + cursor_row.saturating_sub(self.scroll_offset);
            frame.set_cursor_position((x, y));
        }
    }
}

impl EventHandler for EmailEditor {
    type Event = EditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf));
                Some(EditorEvent::Changed)
            }
            TuiEvent::Submit => {
                self.insert_str("\n");
                Some(EditorEvent::Changed)
            }
            TuiEvent::Paste(text) => {
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                self.insert_str(&normalized);
                Some(EditorEvent::Changed)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                EditorEvent::Changed
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                EditorEvent::Changed
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                EditorEvent::Moved
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                EditorEvent::Moved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    EditorEvent::Moved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    EditorEvent::Moved
                })
            }
            TuiEvent::CursorUp => self.move_vertically(-1).then_some(EditorEvent::Moved),
            TuiEvent::CursorDown => self.move_vertically(1).then_some(EditorEvent::Moved),
            _ => None,
        }
    }
}
