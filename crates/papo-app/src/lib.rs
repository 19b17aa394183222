//! Application layer for papo
//!
//! Pure state machine for the chat UI: it consumes [`AppEvent`] inputs and
//! produces [`AppAction`] instructions for the runtime to execute. No I/O
//! lives here, so every behavior is testable without a terminal or a
//! network.
//!
//! # Components
//!
//! - [`App`]: the state machine (input handling, transcript, toast,
//!   install glue)
//! - [`Transcript`] / [`Toast`] / [`InstallState`]: observable view state
//! - [`KeyInput`]: terminal-agnostic keyboard abstraction
//! - [`Command`] / [`MenuEntry`]: input parsing and the side menu

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod event;
mod input;
mod state;

pub use action::AppAction;
pub use app::App;
pub use command::{Command, MenuEntry};
pub use event::AppEvent;
pub use input::KeyInput;
pub use state::{Entry, InstallState, TOAST_DURATION, Toast, Transcript};
