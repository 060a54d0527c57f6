use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{OutputList, StatusLine, SubmitButton, TitleBar};

/// Screen regions, top to bottom.
pub struct ScreenLayout {
    pub title: Rect,
    pub text: Rect,
    pub instruction: Rect,
    pub status: Rect,
    pub button: Rect,
    pub output: Rect,
}

pub fn screen_layout(area: Rect, text_height: u16) -> ScreenLayout {
    use Constraint::{Length, Min};
    let [title, text, instruction, status, button, output] = Layout::vertical([
        Length(1),
        Length(text_height),
        Length(3),
        Length(1),
        Length(3),
        Min(0),
    ])
    .areas(area);

    ScreenLayout {
        title,
        text,
        instruction,
        status,
        button,
        output,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let text_height = tui.text_box.calculate_height(frame.area().width);
    let layout = screen_layout(frame.area(), text_height);

    TitleBar::new(app.server_url.clone(), app.status_message.clone()).render(frame, layout.title);

    tui.text_box.render(frame, layout.text);
    tui.instruction_box.render(frame, layout.instruction);

    StatusLine {
        word_count_label: &app.word_count_label,
        alert: app.word_count_alert,
        loading: app.is_loading,
        spinner_frame: tui.spinner_frame,
    }
    .render(frame, layout.status);

    SubmitButton {
        state: app.submit_state,
        focused: tui.focus == crate::tui::Focus::Button,
    }
    .render(frame, layout.button);

    OutputList {
        cards: &app.cards,
        loading: app.is_loading,
        state: &mut tui.output,
    }
    .render(frame, layout.output);
}
