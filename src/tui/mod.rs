//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form,
//! translates keyboard events into core::Action values, and executes the
//! `Effect`s returned by `update()`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Otherwise**: sleeps up to 500ms, only redraws on events or when a
//!   background task reports back.

pub mod clipboard;
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
use crate::core::controller;
use crate::core::state::App;
use crate::generation::{GenerationClient, GenerationRequest, HttpGenerationClient};
use crate::tui::clipboard::{Clipboard, Osc52Clipboard};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    EditorEvent, EmailEditor, ResultPanelState, TonePickerEvent, TonePickerState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub editor: EmailEditor,
    pub result_panel: ResultPanelState,
    /// Tone overlay (None = hidden)
    pub tone_picker: Option<TonePickerState>,
    /// Endpoint shown in the title bar
    pub endpoint: String,
}

impl TuiState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            editor: EmailEditor::new(),
            result_panel: ResultPanelState::new(),
            tone_picker: None,
            endpoint: endpoint.into(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
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

/// Build the HTTP client from the resolved config.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn GenerationClient> {
    Arc::new(HttpGenerationClient::new(
        config.endpoint_url.clone(),
        config.timeout,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client = build_client(&config);
    let mut app = App::new(client, config.tone);
    let mut tui = TuiState::new(config.endpoint_url.clone());
    let clipboard = Osc52Clipboard::stdout();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event, &tx, &clipboard) {
                break 'main;
            }
        }

        // Outcomes from background requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::GenerationFinished(_)) {
                tui.result_panel = ResultPanelState::new();
            }
            if dispatch(&mut app, action, &tx, &clipboard) {
                break 'main;
            }
        }
    }

    info!("MailGenie shutting down");
    ratatui::restore();
    Ok(())
}

/// Routes one terminal event. Returns true when the app should quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    event: TuiEvent,
    tx: &mpsc::Sender<Action>,
    clipboard: &dyn Clipboard,
) -> bool {
    if matches!(event, TuiEvent::Quit) {
        return dispatch(app, Action::Quit, tx, clipboard);
    }

    // When the tone picker is open, route all events to it
    if let Some(picker) = tui.tone_picker.as_mut() {
        match picker.handle_event(&event) {
            Some(TonePickerEvent::Select(tone)) => {
                tui.tone_picker = None;
                return dispatch(app, Action::SetTone(tone), tx, clipboard);
            }
            Some(TonePickerEvent::Dismiss) => tui.tone_picker = None,
            None => {}
        }
        return false;
    }

    match event {
        TuiEvent::Resize | TuiEvent::Escape => false,
        TuiEvent::OpenTonePicker => {
            tui.tone_picker = Some(TonePickerState::new(app.tone));
            false
        }
        TuiEvent::CycleTone => dispatch(app, Action::CycleTone, tx, clipboard),
        TuiEvent::Generate => dispatch(app, Action::Submit, tx, clipboard),
        TuiEvent::CopyReply => dispatch(app, Action::CopyReply, tx, clipboard),
        TuiEvent::ClearForm => {
            let quit = dispatch(app, Action::ClearForm, tx, clipboard);
            if app.email_content.is_empty() {
                tui.editor.clear();
                tui.result_panel = ResultPanelState::new();
            }
            quit
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.result_panel.handle_event(&event);
            false
        }
        _ => match tui.editor.handle_event(&event) {
            Some(EditorEvent::Changed) => {
                dispatch(app, Action::EditEmail(tui.editor.buffer.clone()), tx, clipboard)
            }
            Some(EditorEvent::Moved) | None => false,
        },
    }
}

/// Runs `update()` and performs the resulting effect. Returns true on quit.
fn dispatch(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    clipboard: &dyn Clipboard,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::SpawnRequest(request) => {
            spawn_request(app.client.clone(), request, tx.clone());
            false
        }
        Effect::CopyToClipboard(text) => {
            let result = clipboard.copy(&text).map_err(|e| e.to_string());
            info!("Clipboard copy of {} bytes: {:?}", text.len(), result);
            dispatch(app, Action::CopyFinished(result), tx, clipboard)
        }
    }
}

fn spawn_request(
    client: Arc<dyn GenerationClient>,
    request: GenerationRequest,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning generation request via {}", client.name());
    tokio::spawn(async move {
        let outcome =
            controller::submit(client.as_ref(), &request.email_content, request.tone).await;
        if tx.send(Action::GenerationFinished(outcome)).is_err() {
            warn!("Failed to send generation outcome: receiver dropped");
        }
    });
}
