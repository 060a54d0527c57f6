//! Cursor position tracking and navigation for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and scroll offset. The text
//! itself stays in `InputBox` and is passed in explicitly.

use super::text_wrap::{Row, layout_rows};

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display row
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    /// Display (row, column) of the cursor. Columns count chars.
    pub fn row_col(&self, buffer: &str, rows: &[Row]) -> (usize, usize) {
        let row = rows.iter().rposition(|r| r.start <= self.pos).unwrap_or(0);
        let col = buffer[rows[row].start..self.pos].chars().count();
        (row, col)
    }

    /// Move one display row up (`-1`) or down (`1`), keeping the column
    /// where the target row is long enough.
    ///
    /// Returns `true` if the cursor moved.
    pub fn move_vertically(&mut self, buffer: &str, direction: i8, width: u16) -> bool {
        let rows = layout_rows(buffer, width);
        let (row, col) = self.row_col(buffer, &rows);

        let target = match direction {
            d if d < 0 && row > 0 => row - 1,
            d if d > 0 && row + 1 < rows.len() => row + 1,
            _ => return false,
        };

        let target_row = rows[target];
        self.pos = buffer[target_row.start..target_row.end]
            .char_indices()
            .nth(col)
            .map(|(i, _)| target_row.start + i)
            .unwrap_or(target_row.end);
        true
    }

    /// Adjust the scroll offset so the cursor row is within `visible` rows.
    pub fn update_scroll_offset(&mut self, buffer: &str, rows: &[Row], visible: u16) {
        if rows.len() <= usize::from(visible) {
            self.scroll_offset = 0;
            return;
        }

        let (row, _) = self.row_col(buffer, rows);
        let row = row as u16;

        if row < self.scroll_offset {
            self.scroll_offset = row;
        } else if row >= self.scroll_offset + visible {
            self.scroll_offset = row + 1 - visible;
        }
    }
}
