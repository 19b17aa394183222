//! Async runtime
//!
//! Event loop that drives terminal I/O and coordinates between the App
//! state machine and the WebSocket connection. Uses tokio::select! to
//! handle terminal events, connection events, and the periodic tick
//! concurrently.
//!
//! The tick doubles as the reconnect clock: every close schedules one
//! dial through [`Reconnector`], and the tick handler fires it once the
//! delay has elapsed.

use std::{
    io::{self, Stdout, stdout},
    time::{Duration, Instant},
};

use chrono::{SecondsFormat, Utc};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use papo_app::{App, AppAction, AppEvent, KeyInput};
use papo_client::{ConnEvent, Connection, Reconnector};
use papo_proto::Outbound;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::{install, ui};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One iteration's worth of input for the event loop.
enum LoopInput {
    Terminal(Option<Result<Event, io::Error>>),
    Conn(Option<ConnEvent>),
    Tick,
}

/// Async runtime for the TUI.
///
/// Manages terminal setup/teardown, the main event loop, the single live
/// connection, and the reconnect schedule.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    endpoint: String,
    connection: Option<Connection>,
    reconnect: Reconnector,
}

impl Runtime {
    /// Create a new runtime for `endpoint` and put the terminal in raw
    /// mode.
    pub fn new(endpoint: String) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let app = App::new(endpoint.clone(), Instant::now());

        Ok(Self { terminal, app, endpoint, connection: None, reconnect: Reconnector::new() })
    }

    /// Run the main event loop until quit.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        if install::offer_available() {
            let _ = self.app.handle(AppEvent::InstallOffered);
        }

        self.render()?;
        self.dial().await?;

        let mut event_stream = EventStream::new();
        let mut tick_interval = tokio::time::interval(TICK_INTERVAL);

        loop {
            let input = tokio::select! {
                maybe_event = event_stream.next() => LoopInput::Terminal(maybe_event),
                conn_event = recv_conn(&mut self.connection) => LoopInput::Conn(conn_event),
                _ = tick_interval.tick() => LoopInput::Tick,
            };

            let should_quit = match input {
                LoopInput::Terminal(maybe_event) => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event).await?,
                    Some(Err(e)) => return Err(RuntimeError::Io(e)),
                    None => true,
                },
                LoopInput::Conn(conn_event) => self.handle_conn_event(conn_event).await?,
                LoopInput::Tick => self.handle_tick().await?,
            };

            if should_quit {
                break;
            }
        }

        self.reconnect.cancel();
        self.connection = None;

        Ok(())
    }

    /// Handle a terminal event and return whether to quit.
    async fn handle_terminal_event(&mut self, event: Event) -> Result<bool, RuntimeError> {
        let app_event = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match convert_key(key.code) {
                    Some(key_input) => AppEvent::Key(key_input),
                    None => return Ok(false),
                }
            },
            Event::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            _ => return Ok(false),
        };

        let actions = self.app.handle(app_event);
        self.process_actions(actions).await
    }

    /// Handle an event from the connection task.
    ///
    /// `None` means the I/O task ended without a close notification
    /// (aborted mid-replacement); it is treated as a close.
    async fn handle_conn_event(
        &mut self,
        conn_event: Option<ConnEvent>,
    ) -> Result<bool, RuntimeError> {
        let app_event = match conn_event {
            Some(ConnEvent::Message(envelope)) => AppEvent::MessageReceived(envelope),
            Some(ConnEvent::TransportError(message)) => AppEvent::TransportError { message },
            Some(ConnEvent::Closed) | None => {
                self.connection = None;
                if self.reconnect.on_close(Instant::now()) {
                    tracing::info!("connection closed, retrying in 3s");
                }
                AppEvent::Closed
            },
        };

        let actions = self.app.handle(app_event);
        self.process_actions(actions).await
    }

    /// Handle the periodic tick: toast expiry and the reconnect schedule.
    async fn handle_tick(&mut self) -> Result<bool, RuntimeError> {
        let now = Instant::now();

        if self.reconnect.take_due(now) {
            self.dial().await?;
        }

        let actions = self.app.handle(AppEvent::Tick { now });
        self.process_actions(actions).await
    }

    /// Dial the endpoint and install the new connection handle.
    ///
    /// A failed dial counts as a close, so the next attempt is scheduled
    /// immediately and retries continue indefinitely.
    async fn dial(&mut self) -> Result<(), RuntimeError> {
        let actions = self.app.handle(AppEvent::Connecting);
        let _ = self.process_actions(actions).await?;

        match papo_client::connect(&self.endpoint).await {
            Ok(conn) => {
                // Replacing the handle aborts any previous I/O task
                self.connection = Some(conn);
                let actions = self.app.handle(AppEvent::Opened);
                let _ = self.process_actions(actions).await?;
            },
            Err(e) => {
                tracing::warn!("dial failed: {e}");
                self.connection = None;
                self.reconnect.on_close(Instant::now());
                let actions = self.app.handle(AppEvent::Closed);
                let _ = self.process_actions(actions).await?;
            },
        }

        Ok(())
    }

    /// Process actions returned by the app. Returns true if should quit.
    ///
    /// Uses iterative processing because an action (install) can feed a
    /// new event back into the app.
    async fn process_actions(
        &mut self,
        initial_actions: Vec<AppAction>,
    ) -> Result<bool, RuntimeError> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.render()?,
                    AppAction::Quit => return Ok(true),
                    AppAction::Send { body } => self.send(body),
                    AppAction::TriggerInstall => {
                        let accepted = match install::perform() {
                            Ok(()) => true,
                            Err(e) => {
                                tracing::warn!("install failed: {e}");
                                false
                            },
                        };
                        let events = self.app.handle(AppEvent::InstallConsumed { accepted });
                        pending_actions.extend(events);
                    },
                }
            }
        }
        Ok(false)
    }

    /// Stamp and transmit one envelope. Fire-and-forget.
    fn send(&mut self, body: String) {
        let Some(conn) = &self.connection else {
            // The app gates sends on the open state; a miss here means the
            // close raced the submit, and the message is dropped
            tracing::warn!("dropping send with no live connection");
            return;
        };

        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        conn.send(Outbound::new(body, timestamp));
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.connection = None;

        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Receive the next connection event, or park forever with no connection.
async fn recv_conn(connection: &mut Option<Connection>) -> Option<ConnEvent> {
    match connection {
        Some(conn) => conn.events.recv().await,
        None => std::future::pending().await,
    }
}

/// Convert crossterm `KeyCode` to `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}
