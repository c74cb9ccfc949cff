//! Row layout for the email editor.
//!
//! Rows come from `textwrap` word wrapping. Each wrapped row is mapped back
//! to a byte range of the buffer; the spaces textwrap drops at a break stay at
//! the end of the row before it, so every byte offset belongs to exactly one
//! row.

use unicode_width::UnicodeWidthChar;

/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Left + right borders consumed horizontally
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

/// A display row as a byte range into the buffer (end exclusive, no '\n').
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Row {
    pub start: usize,
    pub end: usize,
}

/// Inner width of the bordered editor block, never below 1.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD).max(1)
}

/// Build textwrap options for the editor's inner width.
pub(super) fn wrap_options(inner_width: u16) -> textwrap::Options<'static> {
    textwrap::Options::new(usize::from(inner_width.max(1)))
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace)
}

/// Splits `text` into display rows of at most `width` columns (plus any
/// spaces left at a break). Always returns at least one row.
pub(super) fn wrap_rows(text: &str, width: u16) -> Vec<Row> {
    let options = wrap_options(width);
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let starts = wrapped_starts(line, &options);
        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(line.len());
            rows.push(Row {
                start: line_start + start,
                end: line_start + end,
            });
        }
        line_start += line.len() + 1;
    }

    rows
}

/// Byte offsets within `line` where each wrapped row begins.
fn wrapped_starts(line: &str, options: &textwrap::Options<'_>) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut pos = 0;

    for (i, wrapped) in textwrap::wrap(line, options).iter().enumerate() {
        if i > 0 {
            // Rows after a break start at the next word
            let rest = &line[pos..];
            pos += rest.len() - rest.trim_start_matches(' ').len();
        }
        starts.push(pos);
        pos = (pos + wrapped.len()).min(line.len());
    }

    if starts.is_empty() {
        starts.push(0);
    }
    starts
}

/// Row index and display column of byte offset `pos`.
///
/// At a soft wrap the cursor belongs to the start of the next row.
pub(super) fn locate(text: &str, rows: &[Row], pos: usize) -> (usize, u16) {
    let row_index = rows
        .iter()
        .rposition(|row| row.start <= pos)
        .unwrap_or(0);
    let row = rows[row_index];
    let end = pos.min(row.end).max(row.start);
    let col: usize = text[row.start..end]
        .chars()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    (row_index, u16::try_from(col).unwrap_or(u16::MAX))
}

/// Byte offset in `row` closest to display column `col` (not past it).
pub(super) fn offset_at_column(text: &str, row: Row, col: u16) -> usize {
    let mut used = 0usize;
    for (i, c) in text[row.start..row.end].char_indices() {
        let w = c.width().unwrap_or(0);
        if used + w > usize::from(col) {
            return row.start + i;
        }
        used += w;
    }
    row.end
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub(super) fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub(super) fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
