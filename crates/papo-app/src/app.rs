//! Application state machine.
//!
//! [`App`] manages the interactive state of the chat client completely
//! decoupled from I/O and transport mechanics: the transcript, the input
//! line, the toast/status feedback, the side menu, and the one-shot
//! install handle.
//!
//! It is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.

use std::time::Instant;

use papo_client::ConnState;
use papo_proto::MessageKind;

use crate::{
    AppAction, AppEvent, Command, InstallState, KeyInput, MenuEntry, Toast, Transcript,
};

/// UI state machine.
///
/// Processes events and produces actions. No I/O dependencies.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection state (drives the status indicator and send gating).
    state: ConnState,
    /// Endpoint shown in the status bar.
    endpoint: String,
    /// Message list.
    transcript: Transcript,
    /// Transient notice slot.
    toast: Toast,
    /// One-shot install handle.
    install: InstallState,
    /// Input line buffer.
    input_buffer: String,
    /// Cursor position in the input buffer.
    input_cursor: usize,
    /// Side-menu selection. `None` when the menu is closed.
    menu: Option<usize>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Time of the latest tick (toast timing).
    now: Instant,
}

impl App {
    /// Create a new App in disconnected state.
    pub fn new(endpoint: String, now: Instant) -> Self {
        Self {
            state: ConnState::Disconnected,
            endpoint,
            transcript: Transcript::new(),
            toast: Toast::default(),
            install: InstallState::Unavailable,
            input_buffer: String::new(),
            input_cursor: 0,
            menu: None,
            terminal_size: (80, 24),
            now,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => {
                if self.menu.is_some() {
                    self.handle_menu_key(key)
                } else {
                    self.handle_key(key)
                }
            },
            AppEvent::Tick { now } => {
                self.now = now;
                if self.toast.expire(now) { vec![AppAction::Render] } else { vec![] }
            },
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Connecting => {
                self.state = ConnState::Connecting;
                vec![AppAction::Render]
            },
            AppEvent::Opened => {
                self.state = ConnState::Open;
                self.toast.show("Connected to server", self.now);
                vec![AppAction::Render]
            },
            AppEvent::MessageReceived(envelope) => {
                self.transcript.push(envelope.kind(), envelope.texto);
                vec![AppAction::Render]
            },
            AppEvent::TransportError { message } => {
                tracing::warn!(%message, "transport error");
                self.toast.show("Connection error", self.now);
                vec![AppAction::Render]
            },
            AppEvent::Closed => {
                self.state = ConnState::Closed;
                self.toast.show("Disconnected from server", self.now);
                vec![AppAction::Render]
            },
            AppEvent::InstallOffered => {
                tracing::info!("install offer available");
                self.install = InstallState::Available;
                vec![]
            },
            AppEvent::InstallConsumed { accepted } => {
                if accepted {
                    self.toast.show("App installed", self.now);
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    /// Handle keyboard input with the menu closed.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.input_buffer.insert(self.input_cursor, c);
                self.input_cursor = self.input_cursor.saturating_add(c.len_utf8());
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if let Some((offset, _)) = self.input_buffer[..self.input_cursor]
                    .char_indices()
                    .next_back()
                {
                    self.input_buffer.remove(offset);
                    self.input_cursor = offset;
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.input_cursor < self.input_buffer.len() {
                    self.input_buffer.remove(self.input_cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                if let Some((offset, _)) = self.input_buffer[..self.input_cursor]
                    .char_indices()
                    .next_back()
                {
                    self.input_cursor = offset;
                }
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if let Some(c) = self.input_buffer[self.input_cursor..].chars().next() {
                    self.input_cursor = self.input_cursor.saturating_add(c.len_utf8());
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.input_cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.input_cursor = self.input_buffer.len();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.handle_enter(),
            KeyInput::Tab => {
                self.menu = Some(0);
                vec![AppAction::Render]
            },
            KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Up | KeyInput::Down => vec![],
        }
    }

    /// Handle keyboard input with the menu open.
    fn handle_menu_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let last = MenuEntry::ALL.len().saturating_sub(1);
        match key {
            KeyInput::Up => {
                self.menu = self.menu.map(|s| s.saturating_sub(1));
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.menu = self.menu.map(|s| s.saturating_add(1).min(last));
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                let selected = self.menu.and_then(|s| MenuEntry::ALL.get(s).copied());
                self.menu = None;
                match selected {
                    Some(entry) => self.activate_menu_entry(entry),
                    None => vec![AppAction::Render],
                }
            },
            KeyInput::Esc | KeyInput::Tab => {
                self.menu = None;
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    /// Run a menu entry (the menu is already closed).
    fn activate_menu_entry(&mut self, entry: MenuEntry) -> Vec<AppAction> {
        if let Some(canned) = entry.canned_input() {
            // Canned shortcuts populate the input, replacing any draft,
            // and submit it; the buffer is left cleared
            self.input_buffer = canned.to_string();
            self.input_cursor = self.input_buffer.len();
            return self.handle_enter();
        }
        match entry {
            MenuEntry::ClearChat => self.clear_chat(),
            MenuEntry::Install => self.trigger_install(),
            MenuEntry::Quit => vec![AppAction::Quit],
            MenuEntry::Help | MenuEntry::Hora | MenuEntry::Historico => vec![AppAction::Render],
        }
    }

    /// Handle Enter: submit the input line.
    fn handle_enter(&mut self) -> Vec<AppAction> {
        let text = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;

        if text.trim().is_empty() {
            return vec![AppAction::Render];
        }
        self.submit(text)
    }

    /// Dispatch a submitted line.
    fn submit(&mut self, text: String) -> Vec<AppAction> {
        match Command::parse(&text) {
            Command::Clear => self.clear_chat(),
            Command::Install => self.trigger_install(),
            Command::Quit => vec![AppAction::Quit],
            Command::Message(body) => self.send_message(body),
        }
    }

    /// Send a chat message, or reject it if the connection is not open.
    fn send_message(&mut self, body: String) -> Vec<AppAction> {
        if !self.state.is_open() {
            self.toast.show("Not connected to server", self.now);
            return vec![AppAction::Render];
        }

        self.transcript.push(MessageKind::Sent, body.clone());
        vec![AppAction::Send { body }, AppAction::Render]
    }

    /// Clear the transcript. Local only; the server is never notified.
    fn clear_chat(&mut self) -> Vec<AppAction> {
        self.transcript.clear();
        self.toast.show("Chat cleared", self.now);
        vec![AppAction::Render]
    }

    /// Trigger the one-shot install offer.
    fn trigger_install(&mut self) -> Vec<AppAction> {
        match self.install {
            InstallState::Available => {
                self.install = InstallState::Consumed;
                vec![AppAction::TriggerInstall, AppAction::Render]
            },
            InstallState::Unavailable | InstallState::Consumed => {
                self.toast.show("App already installed or unavailable", self.now);
                vec![AppAction::Render]
            },
        }
    }

    /// Connection state.
    pub fn connection_state(&self) -> ConnState {
        self.state
    }

    /// Endpoint shown in the status bar.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Message transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Visible toast text. `None` if hidden.
    pub fn toast_text(&self) -> Option<&str> {
        self.toast.text()
    }

    /// Install handle state.
    pub fn install_state(&self) -> InstallState {
        self.install
    }

    /// Input buffer contents.
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Cursor position in the input buffer (bytes).
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Side-menu selection. `None` when the menu is closed.
    pub fn menu_selection(&self) -> Option<usize> {
        self.menu
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
