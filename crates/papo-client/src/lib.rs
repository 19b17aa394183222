//! Connection manager for papo
//!
//! Owns the single WebSocket connection to the chat endpoint and everything
//! around its lifecycle:
//!
//! - [`ClientId`]: the per-session random token appended to the endpoint
//!   path.
//! - [`ConnState`] / [`ConnEvent`]: explicit connection state plus a typed
//!   event stream consumed by one dispatch loop, instead of ambient
//!   callback slots.
//! - [`Reconnector`]: the retry policy. Every close schedules exactly one
//!   new dial after a constant 3000 ms; retries are unbounded and never
//!   back off.
//! - [`transport`]: the I/O task bridging the socket to channels.
//!
//! There is at most one live [`Connection`] at a time; on reconnect the
//! handle is replaced and the old I/O task aborted.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod event;
pub mod id;
pub mod reconnect;
pub mod transport;

pub use event::{ConnEvent, ConnState};
pub use id::{ClientId, endpoint};
pub use reconnect::{RECONNECT_DELAY, Reconnector};
pub use transport::{CONNECT_TIMEOUT, Connection, TransportError, connect, connect_with_timeout};
