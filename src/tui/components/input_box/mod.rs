//! # InputBox Component
//!
//! An editable text field, used twice: the multi-line essay field and the
//! single-line instruction field.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste
//! - Handle editing (backspace, delete, cursor movement)
//! - Report edits so the parent can re-run the word count
//! - Report Enter on a single-line field as a submit request
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `focused` is a prop set by the
//! parent each frame; only the focused box places the terminal cursor.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    BORDER_OFFSET, VERTICAL_OVERHEAD, inner_width, layout_rows, next_char_boundary,
    prev_char_boundary,
};

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Buffer contents changed
    Edited,
    /// Cursor moved without changing the buffer
    Moved,
    /// Enter pressed in a single-line box
    Submit,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    buffer: String,
    /// Block title
    pub title: String,
    /// Whether the box currently has focus (Prop)
    pub focused: bool,
    multiline: bool,
    max_visible_lines: u16,
    cursor: CursorState,
    /// Inner width from the last render, used for vertical cursor moves
    last_inner_width: u16,
}

impl InputBox {
    const DEFAULT_INNER_WIDTH: u16 = 78;

    pub fn multi_line(title: impl Into<String>, max_visible_lines: u16) -> Self {
        Self::new(title.into(), true, max_visible_lines.max(1))
    }

    pub fn single_line(title: impl Into<String>) -> Self {
        Self::new(title.into(), false, 1)
    }

    fn new(title: String, multiline: bool, max_visible_lines: u16) -> Self {
        Self {
            buffer: String::new(),
            title,
            focused: false,
            multiline,
            max_visible_lines,
            cursor: CursorState::new(),
            last_inner_width: Self::DEFAULT_INNER_WIDTH,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the contents and park the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = self.normalize(text);
        self.cursor.pos = self.buffer.len();
        self.cursor.scroll_offset = 0;
    }

    /// Height needed for the current contents, clamped to the visible line cap.
    pub fn calculate_height(&self, area_width: u16) -> u16 {
        if !self.multiline {
            return 1 + VERTICAL_OVERHEAD;
        }
        let rows = layout_rows(&self.buffer, inner_width(area_width)).len() as u16;
        rows.clamp(1, self.max_visible_lines) + VERTICAL_OVERHEAD
    }

    // Single-line boxes flatten newlines; multi-line boxes drop carriage returns
    fn normalize(&self, text: &str) -> String {
        if self.multiline {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text.replace(['\r', '\n'], " ")
        }
    }

    fn insert(&mut self, text: &str) -> Option<InputEvent> {
        let text = self.normalize(text);
        if text.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor.pos, &text);
        self.cursor.pos += text.len();
        Some(InputEvent::Edited)
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect, total_rows: usize, visible: u16) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        if total_rows <= usize::from(visible) {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_rows - usize::from(visible);
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll)
            .position(usize::from(self.cursor.scroll_offset));

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = inner_width(area.width);
        self.last_inner_width = width.max(1);

        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1);
        let rows = layout_rows(&self.buffer, width);
        self.cursor.update_scroll_offset(&self.buffer, &rows, visible);

        let lines: Vec<Line> = rows
            .iter()
            .skip(usize::from(self.cursor.scroll_offset))
            .take(usize::from(visible))
            .map(|r| Line::raw(&self.buffer[r.start..r.end]))
            .collect();

        let border_style = if self.focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.as_str());

        frame.render_widget(Paragraph::new(lines).block(block), area);
        self.render_scrollbar(frame, area, rows.len(), visible);

        if self.focused {
            let (row, col) = self.cursor.row_col(&self.buffer, &rows);
            let visible_row = (row as u16).saturating_sub(self.cursor.scroll_offset);
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + col as u16,
                area.y + BORDER_OFFSET + visible_row,
            ));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text),
            TuiEvent::Enter => {
                if self.multiline {
                    self.insert("\n")
                } else {
                    Some(InputEvent::Submit)
                }
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    Some(InputEvent::Edited)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor.pos);
                    self.buffer.drain(self.cursor.pos..next);
                    Some(InputEvent::Edited)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => (self.cursor.pos > 0).then(|| {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::Moved
            }),
            TuiEvent::CursorRight => (self.cursor.pos < self.buffer.len()).then(|| {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                InputEvent::Moved
            }),
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    InputEvent::Moved
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    InputEvent::Moved
                })
            }
            TuiEvent::CursorUp if self.multiline => self
                .cursor
                .move_vertically(&self.buffer, -1, self.last_inner_width)
                .then_some(InputEvent::Moved),
            TuiEvent::CursorDown if self.multiline => self
                .cursor
                .move_vertically(&self.buffer, 1, self.last_inner_width)
                .then_some(InputEvent::Moved),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_typing_and_backspace() {
        let mut input = InputBox::multi_line("Text", 5);

        assert_eq!(input.handle_event(&TuiEvent::InputChar('a')), Some(InputEvent::Edited));
        assert_eq!(input.handle_event(&TuiEvent::InputChar('é')), Some(InputEvent::Edited));
        assert_eq!(input.text(), "aé");

        assert_eq!(input.handle_event(&TuiEvent::Backspace), Some(InputEvent::Edited));
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut input = InputBox::single_line("Instruction");
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn test_enter_in_multi_line_inserts_newline() {
        let mut input = InputBox::multi_line("Text", 5);
        input.set_text("one");
        assert_eq!(input.handle_event(&TuiEvent::Enter), Some(InputEvent::Edited));
        assert_eq!(input.text(), "one\n");
    }

    #[test]
    fn test_enter_in_single_line_submits_without_clearing() {
        let mut input = InputBox::single_line("Instruction");
        input.set_text("Be formal.");
        assert_eq!(input.handle_event(&TuiEvent::Enter), Some(InputEvent::Submit));
        assert_eq!(input.text(), "Be formal.");
    }

    #[test]
    fn test_single_line_flattens_paste() {
        let mut input = InputBox::single_line("Instruction");
        input.handle_event(&TuiEvent::Paste("keep it\r\nshort".to_string()));
        assert_eq!(input.text(), "keep it  short");
    }

    #[test]
    fn test_multi_line_normalizes_crlf() {
        let mut input = InputBox::multi_line("Text", 5);
        input.handle_event(&TuiEvent::Paste("a\r\nb".to_string()));
        assert_eq!(input.text(), "a\nb");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = InputBox::single_line("Instruction");
        input.set_text("ac");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_home_end_stay_on_logical_line() {
        let mut input = InputBox::multi_line("Text", 5);
        input.set_text("first\nsecond");
        assert_eq!(input.handle_event(&TuiEvent::CursorHome), Some(InputEvent::Moved));
        input.handle_event(&TuiEvent::InputChar('>'));
        assert_eq!(input.text(), "first\n>second");
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), Some(InputEvent::Moved));
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), None);
    }

    #[test]
    fn test_height_grows_then_clamps() {
        let mut input = InputBox::multi_line("Text", 3);
        assert_eq!(input.calculate_height(40), 3);
        input.set_text("1\n2");
        assert_eq!(input.calculate_height(40), 4);
        input.set_text("1\n2\n3\n4\n5");
        assert_eq!(input.calculate_height(40), 5);
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::single_line("Instruction");
        input.set_text("Be formal.");
        input.focused = true;

        terminal.draw(|f| input.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Instruction"));
        assert!(text.contains("Be formal."));
    }
}
