//! # OutputList Component
//!
//! Scrollable stack of revision cards. Heights come from
//! [`CardView::height`], so the whole list is laid out before anything
//! is drawn into the `ScrollView`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::card::RevisionCard;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::card::CardView;
use crate::tui::event::TuiEvent;

const EMPTY_HINT: &str = "Revisions appear here. Tab to switch fields, Ctrl+S to submit.";

/// Scroll position for the output, kept across frames.
#[derive(Default)]
pub struct OutputListState {
    pub scroll_state: ScrollViewState,
}

impl OutputListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the first card (used when a new submission starts).
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for OutputListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

pub struct OutputList<'a> {
    pub cards: &'a [RevisionCard],
    pub loading: bool,
    pub state: &'a mut OutputListState,
}

impl Component for OutputList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.cards.is_empty() {
            if !self.loading {
                let hint = Paragraph::new(EMPTY_HINT)
                    .alignment(Alignment::Center)
                    .style(Style::default().add_modifier(Modifier::DIM));
                frame.render_widget(hint, area);
            }
            return;
        }

        // Leave one column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let views: Vec<(CardView, u16)> = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let view = CardView::new(card, i);
                (view, view.height(content_width))
            })
            .collect();
        let total_height: u16 = views.iter().map(|(_, h)| *h).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (view, height) in views {
            scroll_view.render_widget(view, Rect::new(0, y_offset, content_width, height));
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
