//! Terminal UI for papo
//!
//! A thin shell over [`papo_app::App`] that provides terminal-specific
//! I/O: crossterm keyboard events, ratatui rendering, and the WebSocket
//! connection lifecycle including the fixed-delay reconnect loop.
//!
//! All chat behavior lives in `papo-app`; this crate only drives it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod install;
pub mod register;
pub mod runtime;
pub mod ui;

pub use runtime::{Runtime, RuntimeError};
