//! # Clipboard
//!
//! Copy goes through the terminal's OSC 52 escape sequence so it also works
//! over SSH and inside multiplexers. The payload is base64 of the exact
//! UTF-8 bytes, so the pasted text is identical to the reply.
//!
//! OSC 52 can't confirm the terminal honored it, so the terminal clipboard
//! always keeps an in-process copy as well. An error from `copy` means the
//! terminal write failed and only that copy exists.

use std::io::{self, Write};
use std::sync::Mutex;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, warn};

pub trait Clipboard {
    /// Writes `text` to the clipboard unchanged.
    fn copy(&self, text: &str) -> io::Result<()>;
}

/// Builds the OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Terminal clipboard via OSC 52, with an internal fallback copy.
pub struct Osc52Clipboard<W = io::Stdout> {
    out: Mutex<W>,
    internal: MemoryClipboard,
}

impl Osc52Clipboard {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            internal: MemoryClipboard::default(),
        }
    }

    /// The last copied text, whether or not the terminal took it.
    pub fn internal(&self) -> &MemoryClipboard {
        &self.internal
    }

    pub fn into_writer(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&self, text: &str) -> io::Result<()> {
        self.internal.copy(text)?;

        let sequence = osc52_sequence(text);
        debug!("Writing OSC 52 sequence ({} bytes payload)", text.len());
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("terminal writer lock poisoned"))?;
        out.write_all(sequence.as_bytes())
            .and_then(|()| out.flush())
            .inspect_err(|e| warn!("OSC 52 write failed, kept internal copy: {}", e))
    }
}

/// In-process clipboard. Keeps the last copied text.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> io::Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| io::Error::other("clipboard lock poisoned"))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_round_trips_exact_bytes() {
        let text = "  Sure, how about Friday? ✨\r\n";
        let sequence = osc52_sequence(text);
        let payload = sequence
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, text.as_bytes());
    }

    #[test]
    fn test_memory_clipboard_keeps_last_copy() {
        let clipboard = MemoryClipboard::default();
        assert_eq!(clipboard.contents(), None);
        clipboard.copy("first").unwrap();
        clipboard.copy(" second ").unwrap();
        assert_eq!(clipboard.contents().as_deref(), Some(" second "));
    }

    struct BrokenTerminal;

    impl Write for BrokenTerminal {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("not a tty"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_osc52_clipboard_writes_sequence_and_keeps_copy() {
        let clipboard = Osc52Clipboard::with_writer(Vec::new());
        clipboard.copy("Sure, how about Friday?").unwrap();
        assert_eq!(
            clipboard.internal().contents().as_deref(),
            Some("Sure, how about Friday?")
        );
        let written = clipboard.into_writer();
        assert_eq!(written, osc52_sequence("Sure, how about Friday?").into_bytes());
    }

    #[test]
    fn test_osc52_failure_still_keeps_internal_copy() {
        let clipboard = Osc52Clipboard::with_writer(BrokenTerminal);
        assert!(clipboard.copy("Thanks!").is_err());
        assert_eq!(clipboard.internal().contents().as_deref(), Some("Thanks!"));
    }
}
