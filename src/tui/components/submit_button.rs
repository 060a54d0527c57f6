//! # SubmitButton Component
//!
//! The "Start Editing" control. Its background tracks [`SubmitState`]:
//! salmon when ready, grey when the text is over the word limit, and a
//! deeper coral once a request has been dispatched.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::view::SubmitState;
use crate::tui::component::Component;

pub const READY_BG: Color = Color::Rgb(0xF4, 0xA8, 0x96);
pub const DISABLED_BG: Color = Color::Rgb(0xCC, 0xCC, 0xCC);
pub const IN_PROGRESS_BG: Color = Color::Rgb(0xF6, 0x7E, 0x68);

pub struct SubmitButton {
    pub state: SubmitState,
    pub focused: bool,
}

impl SubmitButton {
    fn label(&self) -> &'static str {
        match self.state {
            SubmitState::Ready => "Start Editing  (Ctrl+S)",
            SubmitState::Disabled => "Start Editing  (over word limit)",
            SubmitState::InProgress => "Editing...",
        }
    }

    fn style(&self) -> Style {
        let bg = match self.state {
            SubmitState::Ready => READY_BG,
            SubmitState::Disabled => DISABLED_BG,
            SubmitState::InProgress => IN_PROGRESS_BG,
        };
        let style = Style::default().bg(bg).fg(Color::Black);
        if self.state == SubmitState::Disabled {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }
}

impl Component for SubmitButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(self.style())
            .block(block);
        frame.render_widget(button, area);
    }
}
