//! # StatusLine Component
//!
//! Word count on the left, loading spinner on the right.
//!
//! The count turns red and bold once the text passes the word limit. The
//! spinner is drawn only while a request is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StatusLine<'a> {
    pub word_count_label: &'a str,
    pub alert: bool,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl StatusLine<'_> {
    fn word_count_style(&self) -> Style {
        if self.alert {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    fn loading_text(&self) -> String {
        let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        format!("{frame} Revising...")
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(14)]).areas(area);

        frame.render_widget(
            Span::styled(self.word_count_label, self.word_count_style()),
            left,
        );

        if self.loading {
            let spinner = Paragraph::new(self.loading_text())
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Right);
            frame.render_widget(spinner, right);
        }
    }
}
