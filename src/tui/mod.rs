//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ─► TuiEvent ─► handle_event ─┬─► InputBox / TranscriptView
//!                                        └─► core::update ─► Effect
//! tokio task ─► Action (mpsc) ─► handle_action ─► core::update ─► Effect
//! ```
//!
//! The completion request runs as a tokio task and posts its result back as
//! an `Action`. While it is outstanding `App::is_loading` is set and the input
//! box ignores edits and Enter, so exactly one request is ever in flight.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms to animate the spinner.
//! - **Idle**: sleeps until the next cursor blink (~530ms) or an event.
//!
//! The cursor blink is driven by `TuiEvent::BlinkTick` rather than the
//! terminal, so `SteadyBlock` is set and the input box shows or hides the
//! cursor itself.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::fmt;
use std::io::{self, stdout};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::layout::Size;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::Config;
use crate::core::state::App;
use crate::inference::{CompletionClient, OpenAiClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, TranscriptViewState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const BLINK_INTERVAL: Duration = Duration::from_millis(530);
const LOADING_FRAME: Duration = Duration::from_millis(80);

/// Errors that end the session abnormally.
#[derive(Debug)]
pub enum RunError {
    /// Terminal I/O failed.
    Io(io::Error),
    /// The completion request failed.
    Completion(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(e) => write!(f, "terminal error: {e}"),
            RunError::Completion(msg) => {
                write!(f, "error encountered while making request to OpenAI API: {msg}")
            }
        }
    }
}

impl std::error::Error for RunError {}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub transcript: TranscriptViewState,
    pub input_box: InputBox,
    /// Terminal size from the last resize
    pub size: Size,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            transcript: TranscriptViewState::new(),
            input_box: InputBox::new(),
            size: Size::new(0, 0),
        }
    }

    /// Geometry only: transcript content and input text are untouched.
    pub fn resize(&mut self, width: u16, height: u16) {
        debug!("Resize to {}x{}", width, height);
        self.size = Size::new(width, height);
        self.input_box.set_width(width);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
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
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

/// What the loop does after an effect has been carried out.
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Quit,
}

/// Route one terminal event and return the effect the loop has to carry out.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let effect = match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Resize(width, height) => {
            tui.resize(*width, *height);
            Effect::None
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.transcript.handle_event(event);
            Effect::None
        }
        _ => {
            tui.input_box.disabled = app.is_loading;
            match tui.input_box.handle_event(event) {
                Some(InputEvent::Submit(text)) => update(app, Action::Submit(text)),
                Some(InputEvent::ContentChanged) | None => Effect::None,
            }
        }
    };
    tui.input_box.disabled = app.is_loading;
    effect
}

/// Apply an action posted by a background task.
fn handle_action(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let effect = update(app, action);
    if effect == Effect::TranscriptChanged {
        tui.input_box.clear();
        tui.transcript.scroll_to_bottom();
    }
    tui.input_box.disabled = app.is_loading;
    effect
}

fn apply_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    in_flight: &mut Option<AbortHandle>,
) -> Result<Flow, RunError> {
    match effect {
        Effect::None => Ok(Flow::Continue),
        Effect::SpawnRequest(prompt) => {
            *in_flight = Some(spawn_request(app.client.clone(), prompt, tx.clone()));
            Ok(Flow::Continue)
        }
        Effect::TranscriptChanged => {
            *in_flight = None;
            Ok(Flow::Continue)
        }
        Effect::Quit => {
            if let Some(handle) = in_flight.take() {
                info!("Quit with a request in flight; aborting it");
                handle.abort();
            }
            Ok(Flow::Quit)
        }
        Effect::Fatal(message) => Err(RunError::Completion(message)),
    }
}

/// Runs the interactive session until the user quits.
///
/// Returns the input text present at quit time; the caller prints it once
/// the terminal has been restored.
pub fn run(config: Config) -> Result<String, RunError> {
    let client = Arc::new(OpenAiClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.model.clone(),
    ));
    info!("Using {} client with model {}", client.name(), client.model());
    let mut app = App::new(client, config.model);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::try_init()?;
    let result = match TerminalModeGuard::new() {
        Ok(_terminal_mode_guard) => event_loop(&mut terminal, &mut app, &mut tui),
        Err(e) => Err(e.into()),
    };
    ratatui::restore();

    result.map(|()| std::mem::take(&mut tui.input_box.buffer))
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> Result<(), RunError> {
    let size = terminal.size()?;
    tui.resize(size.width, size.height);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut in_flight: Option<AbortHandle> = None;

    let start_time = Instant::now();
    let mut last_blink = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw || app.is_loading {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            LOADING_FRAME
        } else {
            BLINK_INTERVAL.saturating_sub(last_blink.elapsed())
        };

        // First event (blocking up to timeout), then drain everything pending
        let mut events = Vec::new();
        if let Some(event) = poll_event_timeout(timeout)? {
            events.push(event);
            while let Some(event) = poll_event_immediate()? {
                events.push(event);
            }
        }
        if last_blink.elapsed() >= BLINK_INTERVAL {
            events.push(TuiEvent::BlinkTick);
            last_blink = Instant::now();
        }

        for event in &events {
            needs_redraw = true;
            let effect = handle_event(app, tui, event);
            if apply_effect(effect, app, &tx, &mut in_flight)? == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }

        // Results from the completion task
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = handle_action(app, tui, action);
            if apply_effect(effect, app, &tx, &mut in_flight)? == Flow::Quit {
                return Ok(());
            }
        }
    }
}

/// Performs one completion and converts the outcome into an `Action`.
async fn request_completion(client: Arc<dyn CompletionClient>, prompt: String) -> Action {
    match client.complete(&prompt).await {
        Ok(reply) => Action::CompletionReceived(reply),
        Err(e) => {
            warn!("Completion request failed: {}", e);
            Action::CompletionFailed(e.to_string())
        }
    }
}

fn spawn_request(
    client: Arc<dyn CompletionClient>,
    prompt: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning completion request via {}", client.name());
    let handle = tokio::spawn(async move {
        let action = request_completion(client, prompt).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver completion result: receiver dropped");
        }
    });
    handle.abort_handle()
}
