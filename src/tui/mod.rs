//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or when a
//!   background request reports back.
//!
//! ## Requests
//!
//! `Action::Submit` yields `Effect::SpawnRequest`. The request runs as a
//! tokio task and posts `Action::RevisionSettled` back over an mpsc
//! channel, drained once per loop iteration. The event loop itself never
//! awaits.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::revision::{EditRequest, RevisionClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, OutputListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Visible rows of the text field before it scrolls internally.
const TEXT_VISIBLE_LINES: u16 = 8;

/// Which control receives typed input. Tab cycles forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Text,
    Instruction,
    Button,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Text => Focus::Instruction,
            Focus::Instruction => Focus::Button,
            Focus::Button => Focus::Text,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Text => Focus::Button,
            Focus::Instruction => Focus::Text,
            Focus::Button => Focus::Instruction,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub text_box: InputBox,
    pub instruction_box: InputBox,
    pub focus: Focus,
    pub output: OutputListState,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut text_box = InputBox::multi_line("Text", TEXT_VISIBLE_LINES);
        text_box.set_text(&app.text);
        let mut instruction_box = InputBox::single_line("Instruction");
        instruction_box.set_text(&app.instruction);

        let mut state = Self {
            text_box,
            instruction_box,
            focus: Focus::Text, // User expects to type immediately
            output: OutputListState::new(),
            spinner_frame: 0,
        };
        state.sync_focus();
        state
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        self.text_box.focused = self.focus == Focus::Text;
        self.instruction_box.focused = self.focus == Focus::Instruction;
    }
}

/// What the loop should do after routing one event.
#[derive(Debug, PartialEq)]
enum Routed {
    Continue,
    Quit,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(
    config: ResolvedConfig,
    client: Arc<dyn RevisionClient>,
    initial_text: String,
) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    if !initial_text.is_empty() {
        update(&mut app, Action::TextEdited(initial_text));
    }
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Short poll while the spinner runs (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if route_event(&event, &mut app, &mut tui, &client, &tx) == Routed::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Handle settled requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one terminal event to the focused control or a global handler.
fn route_event(
    event: &TuiEvent,
    app: &mut App,
    tui: &mut TuiState,
    client: &Arc<dyn RevisionClient>,
    tx: &mpsc::Sender<Action>,
) -> Routed {
    match event {
        // Resize just needs a redraw (already flagged)
        TuiEvent::Resize => return Routed::Continue,
        TuiEvent::ForceQuit | TuiEvent::Quit => {
            return match update(app, Action::Quit) {
                Effect::Quit => Routed::Quit,
                _ => Routed::Continue,
            };
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.output.handle_event(event);
            return Routed::Continue;
        }
        TuiEvent::FocusNext => {
            tui.set_focus(tui.focus.next());
            return Routed::Continue;
        }
        TuiEvent::FocusPrev => {
            tui.set_focus(tui.focus.prev());
            return Routed::Continue;
        }
        TuiEvent::Submit => {
            submit(app, tui, client, tx);
            return Routed::Continue;
        }
        _ => {}
    }

    match tui.focus {
        Focus::Text => {
            if tui.text_box.handle_event(event) == Some(InputEvent::Edited) {
                update(app, Action::TextEdited(tui.text_box.text().to_string()));
            }
        }
        Focus::Instruction => match tui.instruction_box.handle_event(event) {
            Some(InputEvent::Edited) => {
                update(
                    app,
                    Action::InstructionEdited(tui.instruction_box.text().to_string()),
                );
            }
            Some(InputEvent::Submit) => submit(app, tui, client, tx),
            _ => {}
        },
        Focus::Button => {
            if matches!(event, TuiEvent::Enter | TuiEvent::InputChar(' ')) {
                submit(app, tui, client, tx);
            }
        }
    }
    Routed::Continue
}

fn submit(
    app: &mut App,
    tui: &mut TuiState,
    client: &Arc<dyn RevisionClient>,
    tx: &mpsc::Sender<Action>,
) {
    if let Effect::SpawnRequest(request) = update(app, Action::Submit) {
        tui.output.reset();
        spawn_request(client.clone(), request, tx.clone());
    }
}

fn spawn_request(client: Arc<dyn RevisionClient>, request: EditRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning revision request to {}", client.endpoint());
    tokio::spawn(async move {
        let started = Instant::now();
        let outcome = client.revise(&request).await;
        info!(
            "Revision request settled in {}ms (ok={})",
            started.elapsed().as_millis(),
            outcome.is_ok()
        );
        if tx.send(Action::RevisionSettled(outcome)).is_err() {
            warn!("Failed to send revision outcome: receiver dropped");
        }
    });
}
