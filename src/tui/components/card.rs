//! # Card Component
//!
//! One bordered block per [`RevisionCard`], numbered in response order:
//!
//! ```text
//! ╭ 1 ─────────────────────────────╮
//! │ Original: He go home.          │
//! │ Revised: He goes home.         │
//! │ Explanation: Subject-verb ...  │
//! ╰────────────────────────────────╯
//! ```
//!
//! Lines are pre-wrapped with `textwrap` so [`CardView::height`] can be
//! computed without rendering, which the scrolling list needs to lay
//! cards out.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::card::RevisionCard;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

#[derive(Clone, Copy)]
pub struct CardView<'a> {
    pub card: &'a RevisionCard,
    /// Zero-based position in the output, shown one-based
    pub index: usize,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a RevisionCard, index: usize) -> Self {
        Self { card, index }
    }

    /// Rows needed to draw this card at the given outer width.
    pub fn height(&self, width: u16) -> u16 {
        self.lines(width.saturating_sub(HORIZONTAL_OVERHEAD)).len() as u16 + VERTICAL_OVERHEAD
    }

    fn lines(&self, inner_width: u16) -> Vec<Line<'static>> {
        let width = usize::from(inner_width.max(1));
        let sections = [
            (self.card.original_line(), Style::default()),
            (self.card.revised_line(), Style::default().fg(Color::Green)),
            (
                self.card.explanation_line(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ];

        sections
            .into_iter()
            .flat_map(|(text, style)| {
                textwrap::wrap(&text, width)
                    .into_iter()
                    .map(|row| Line::styled(row.into_owned(), style))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(0xF4, 0xA8, 0x96)))
            .title(format!(" {} ", self.index + 1))
            .padding(Padding::horizontal(CONTENT_PAD_H));
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(self.lines(inner.width)).render(inner, buf);
    }
}
