//! Application input events.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, resize) and the periodic tick.
//! - Connection notifications forwarded from the transport by the runtime.

use std::time::Instant;

use papo_proto::Inbound;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick carrying the current time (drives toast expiry).
    Tick {
        /// Current time.
        now: Instant,
    },

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Dial in progress.
    Connecting,

    /// Connection opened; sends are accepted from here on.
    Opened,

    /// Parsed inbound envelope, in transport delivery order.
    MessageReceived(Inbound),

    /// Transport-level error. Non-fatal; the close that follows owns
    /// recovery.
    TransportError {
        /// Error description.
        message: String,
    },

    /// Connection closed, for any reason.
    Closed,

    /// An install offer became available and is armed for one trigger.
    InstallOffered,

    /// The triggered install flow finished; the one-shot handle is spent
    /// either way.
    InstallConsumed {
        /// Whether the install completed.
        accepted: bool,
    },
}
