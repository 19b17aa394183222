//! Fuzz target for the App state machine
//!
//! # Strategy
//!
//! - Arbitrary interleavings of keyboard input, connection lifecycle
//!   events, inbound messages, ticks, and install events
//!
//! # Invariants
//!
//! - No event sequence panics
//! - The input cursor stays on a char boundary inside the buffer
//! - A Send action is only produced while the connection is open
//! - The transcript only grows, except through an explicit clear

#![no_main]

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use papo_app::{App, AppAction, AppEvent, KeyInput};
use papo_proto::Inbound;

#[derive(Debug, Clone, Arbitrary)]
enum FuzzKey {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl FuzzKey {
    fn into_key(self) -> KeyInput {
        match self {
            Self::Char(c) => KeyInput::Char(c),
            Self::Enter => KeyInput::Enter,
            Self::Backspace => KeyInput::Backspace,
            Self::Delete => KeyInput::Delete,
            Self::Tab => KeyInput::Tab,
            Self::Esc => KeyInput::Esc,
            Self::Left => KeyInput::Left,
            Self::Right => KeyInput::Right,
            Self::Up => KeyInput::Up,
            Self::Down => KeyInput::Down,
            Self::Home => KeyInput::Home,
            Self::End => KeyInput::End,
        }
    }
}

#[derive(Debug, Clone, Arbitrary)]
enum FuzzEvent {
    Key(FuzzKey),
    TickMillis(u16),
    Resize(u16, u16),
    Connecting,
    Opened,
    Inbound(String),
    TransportError(String),
    Closed,
    InstallOffered,
    InstallConsumed(bool),
}

fuzz_target!(|events: Vec<FuzzEvent>| {
    let base = Instant::now();
    let mut app = App::new("wss://fuzz.test/ws/user_fuzz00000".into(), base);
    let mut elapsed = Duration::ZERO;

    for event in events {
        let app_event = match event {
            FuzzEvent::Key(key) => AppEvent::Key(key.into_key()),
            FuzzEvent::TickMillis(ms) => {
                elapsed += Duration::from_millis(u64::from(ms));
                AppEvent::Tick { now: base + elapsed }
            },
            FuzzEvent::Resize(cols, rows) => AppEvent::Resize(cols, rows),
            FuzzEvent::Connecting => AppEvent::Connecting,
            FuzzEvent::Opened => AppEvent::Opened,
            FuzzEvent::Inbound(texto) => {
                AppEvent::MessageReceived(Inbound { tipo: None, texto })
            },
            FuzzEvent::TransportError(message) => AppEvent::TransportError { message },
            FuzzEvent::Closed => AppEvent::Closed,
            FuzzEvent::InstallOffered => AppEvent::InstallOffered,
            FuzzEvent::InstallConsumed(accepted) => AppEvent::InstallConsumed { accepted },
        };

        let open_before = app.connection_state().is_open();
        let actions = app.handle(app_event);

        assert!(app.input_cursor() <= app.input_buffer().len());
        assert!(app.input_buffer().is_char_boundary(app.input_cursor()));

        if !open_before {
            assert!(!actions.iter().any(|a| matches!(a, AppAction::Send { .. })));
        }
    }
});
