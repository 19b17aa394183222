//! Fixed-delay reconnect policy.
//!
//! Unbounded retries at a constant interval: every close schedules exactly
//! one dial 3000 ms later. No backoff growth, no retry cap. The schedule
//! is plain state consulted by the tick loop, so teardown can cancel it.

use std::time::{Duration, Instant};

/// Delay between a close and the next dial.
pub const RECONNECT_DELAY: Duration = Duration::from_millis(3000);

/// Cancellable fixed-delay reconnect schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconnector {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Reconnector {
    /// Policy with the standard [`RECONNECT_DELAY`].
    pub fn new() -> Self {
        Self::with_delay(RECONNECT_DELAY)
    }

    /// Policy with a custom delay (tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Record a close at `now`.
    ///
    /// Schedules one attempt at `now + delay`. A close arriving while an
    /// attempt is already pending is absorbed, so rapid repeated closes
    /// never stack attempts. Returns whether a new attempt was scheduled.
    pub fn on_close(&mut self, now: Instant) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + self.delay);
        true
    }

    /// Consume the pending attempt if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            },
            _ => false,
        }
    }

    /// Whether an attempt is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Drop the pending attempt (teardown path only; during normal
    /// operation the timer always fires).
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Reconnector {
    fn default() -> Self {
        Self::new()
    }
}
