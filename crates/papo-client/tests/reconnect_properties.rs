//! Property-based tests for the reconnect policy.
//!
//! Verifies the invariant that any close schedules exactly one attempt at
//! a constant interval, under arbitrary close timing.

use std::time::{Duration, Instant};

use papo_client::{RECONNECT_DELAY, Reconnector};
use proptest::prelude::*;

proptest! {
    /// A burst of rapid close events coalesces into exactly one pending
    /// attempt, and it never fires before the configured delay.
    #[test]
    fn prop_rapid_closes_schedule_once(offsets in prop::collection::vec(0u64..2999, 1..20)) {
        let base = Instant::now();
        let mut r = Reconnector::new();

        let mut scheduled = 0;
        for off in &offsets {
            let now = base + Duration::from_millis(*off);
            if r.on_close(now) {
                scheduled += 1;
            }
            // Every offset is inside the first close's delay window
            prop_assert!(!r.take_due(now));
        }
        prop_assert_eq!(scheduled, 1);
        prop_assert!(r.is_pending());

        let first = base + Duration::from_millis(offsets[0]);
        prop_assert!(!r.take_due(first + Duration::from_millis(2999)));
        prop_assert!(r.take_due(first + RECONNECT_DELAY));
        prop_assert!(!r.is_pending());
    }

    /// After an attempt fires, the next close schedules again: retries are
    /// unbounded and the interval never grows.
    #[test]
    fn prop_retries_are_unbounded_at_constant_interval(rounds in 1usize..50) {
        let base = Instant::now();
        let mut r = Reconnector::new();

        let mut now = base;
        for _ in 0..rounds {
            prop_assert!(r.on_close(now));
            prop_assert!(!r.take_due(now + RECONNECT_DELAY - Duration::from_millis(1)));
            now += RECONNECT_DELAY;
            prop_assert!(r.take_due(now));
        }
    }

    /// Cancellation drops the pending attempt without firing it.
    #[test]
    fn prop_cancel_never_fires(off in 0u64..10_000) {
        let base = Instant::now();
        let mut r = Reconnector::new();

        r.on_close(base);
        r.cancel();
        prop_assert!(!r.take_due(base + Duration::from_millis(off)));
    }
}
