//! Row layout for the input box.
//!
//! Text is hard-wrapped by character count so every display row maps to
//! an exact byte range of the buffer. The cursor math in `cursor.rs`
//! depends on that mapping; soft word wrapping would break it.

/// Left + right borders consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to content (border width)
pub(super) const BORDER_OFFSET: u16 = 1;

/// One display row as a byte range `start..end` of the buffer.
/// `end` never includes the newline that terminates a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Row {
    pub start: usize,
    pub end: usize,
}

/// Inner content width after subtracting the borders. 0 if too narrow.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Split `text` into display rows at most `width` chars wide.
///
/// Always returns at least one row, and a trailing newline yields a
/// trailing empty row.
pub(super) fn layout_rows(text: &str, width: u16) -> Vec<Row> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let mut row_start = line_start;
        let mut chars_in_row = 0;
        for (i, _) in line.char_indices() {
            if chars_in_row == width {
                rows.push(Row {
                    start: row_start,
                    end: line_start + i,
                });
                row_start = line_start + i;
                chars_in_row = 0;
            }
            chars_in_row += 1;
        }
        rows.push(Row {
            start: row_start,
            end: line_start + line.len(),
        });
        line_start += line.len() + 1;
    }

    rows
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
