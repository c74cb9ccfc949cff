use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Generate,
    CopyReply,
    CycleTone,
    ClearForm,

    // TUI-local events (handled directly in TUI)
    OpenTonePicker,
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Submit,        // Enter: newline in the editor, select in the tone picker
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    Escape,
    ScrollUp,
    ScrollDown,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Maps a raw crossterm event to a `TuiEvent`.
fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code, key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => Some(TuiEvent::Quit),
                (KeyModifiers::CONTROL, KeyCode::Char('g')) => Some(TuiEvent::Generate),
                (KeyModifiers::CONTROL, KeyCode::Char('y')) => Some(TuiEvent::CopyReply),
                (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::OpenTonePicker),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::ClearForm),
                // Ctrl+J inserts newline (ASCII LF; some terminals send this for Enter)
                (KeyModifiers::CONTROL, KeyCode::Char('j')) => Some(TuiEvent::Submit),
                (KeyModifiers::CONTROL, KeyCode::Char(_)) => None,
                (_, KeyCode::Tab) => Some(TuiEvent::CycleTone),
                (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
                (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (_, KeyCode::Esc) => Some(TuiEvent::Escape),
                (_, KeyCode::PageUp) => Some(TuiEvent::ScrollUp),
                (_, KeyCode::PageDown) => Some(TuiEvent::ScrollDown),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_control_shortcuts() {
        let cases = [
            ('g', TuiEvent::Generate),
            ('y', TuiEvent::CopyReply),
            ('t', TuiEvent::OpenTonePicker),
            ('l', TuiEvent::ClearForm),
            ('c', TuiEvent::Quit),
            ('q', TuiEvent::Quit),
        ];
        for (c, expected) in cases {
            assert_eq!(
                translate(key(KeyCode::Char(c), KeyModifiers::CONTROL)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_plain_chars_are_input() {
        assert_eq!(
            translate(key(KeyCode::Char('g'), KeyModifiers::NONE)),
            Some(TuiEvent::InputChar('g'))
        );
        assert_eq!(
            translate(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(TuiEvent::InputChar('G'))
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(event), None);
    }

    #[test]
    fn test_paste_and_resize() {
        assert_eq!(
            translate(Event::Paste("a\nb".to_string())),
            Some(TuiEvent::Paste("a\nb".to_string()))
        );
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }
}
