//! # TitleBar Component
//!
//! Single top line: which server we talk to and the latest status.
//!
//! 1. **Status message**: `"Revise (server: http://localhost:8000) | Revising..."`
//! 2. **No status**: `"Revise (server: http://localhost:8000)"`
//!
//! Purely presentational. All fields are props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub server_url: String,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(server_url: String, status_message: String) -> Self {
        Self {
            server_url,
            status_message,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Revise (server: {})", self.server_url)
        } else {
            format!("Revise (server: {}) | {}", self.server_url, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(
            self.title_text(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        frame.render_widget(span, area);
    }
}
