//! Connection state and typed connection events.

use papo_proto::Inbound;

/// Lifecycle state of the single connection.
///
/// The machine loops `Disconnected -> Connecting -> Open -> Closed ->
/// Connecting -> ...` forever once started; only process teardown ends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnState {
    /// No dial attempted yet.
    #[default]
    Disconnected,
    /// Dial in progress.
    Connecting,
    /// Connected; sends are accepted.
    Open,
    /// Connection ended; a reconnect is pending.
    Closed,
}

impl ConnState {
    /// Whether the status indicator shows online.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Events emitted by the transport task.
///
/// A typed event stream consumed by the single runtime loop replaces the
/// usual ad-hoc open/message/error/close callback slots; ordering is
/// exactly transport delivery order, with no hidden re-entrancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnEvent {
    /// Parsed inbound envelope. Malformed frames never produce this; they
    /// are logged and dropped inside the transport.
    Message(Inbound),
    /// Transport-level error. Non-fatal; the close that follows owns the
    /// state transition and the reconnect.
    TransportError(String),
    /// Connection ended, for any reason.
    Closed,
}
