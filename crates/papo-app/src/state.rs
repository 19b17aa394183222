//! Observable application state types.
//!
//! The view model for the renderer: the transcript, the transient toast
//! slot, and the one-shot install handle. None of these own I/O.

use std::time::{Duration, Instant};

use papo_proto::MessageKind;

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Render class.
    pub kind: MessageKind,
    /// Message body.
    pub body: String,
}

/// Ordered message list plus the welcome placeholder.
///
/// Entries are appended in arrival order and never reordered or buffered.
/// Nothing survives the process; this is the only message store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
    welcome: bool,
}

impl Transcript {
    /// Empty transcript showing the welcome placeholder.
    pub fn new() -> Self {
        Self { entries: Vec::new(), welcome: true }
    }

    /// Append a message.
    ///
    /// The first sent or received message removes the welcome placeholder;
    /// system notices leave it in place.
    pub fn push(&mut self, kind: MessageKind, body: impl Into<String>) {
        if kind != MessageKind::System {
            self.welcome = false;
        }
        self.entries.push(Entry { kind, body: body.into() });
    }

    /// Reset to the welcome placeholder. Local only; the server is never
    /// notified.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.welcome = true;
    }

    /// Entries in arrival order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether the welcome placeholder is showing.
    pub fn has_welcome(&self) -> bool {
        self.welcome
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-slot transient notice.
///
/// Last write wins: a new toast overwrites the visible text and resets the
/// hide timer. There is no queue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Toast {
    current: Option<(String, Instant)>,
}

impl Toast {
    /// Show `text`, replacing whatever is visible and restarting the
    /// timer.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some((text.into(), now));
    }

    /// Hide the toast once [`TOAST_DURATION`] has elapsed. Returns whether
    /// it was hidden by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, shown_at)) if now.duration_since(*shown_at) >= TOAST_DURATION => {
                self.current = None;
                true
            },
            _ => false,
        }
    }

    /// Currently visible text. `None` if hidden.
    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|(text, _)| text.as_str())
    }
}

/// One-shot install offer handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallState {
    /// No offer observed (or none possible in this environment).
    #[default]
    Unavailable,
    /// An offer is armed and can be triggered exactly once.
    Available,
    /// The offer was consumed; a fresh offer is required to trigger again.
    Consumed,
}
