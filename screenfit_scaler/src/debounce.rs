// Copyright 2026 the Screenfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot quiescence window for coalescing resize signals.
//!
//! The scaler never reads a clock; callers pass millisecond timestamps
//! into [`Debouncer::signal`] and [`Debouncer::fire`]. Any time source
//! with monotonic millisecond semantics works (event-loop time, a timer
//! thread, a test counter).

/// Default quiescence window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;

/// At-most-one pending deadline, newest signal wins.
///
/// A burst of signals (for example during interactive window dragging)
/// keeps replacing the deadline, so only one recompute runs once the burst
/// settles for the full window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates a debouncer with the given quiescence window.
    #[must_use]
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline: None,
        }
    }

    /// Records a signal at `now_ms`, replacing any pending deadline.
    pub fn signal(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Reports whether the pending deadline has elapsed at `now_ms`,
    /// clearing it when it has. Returns `true` at most once per signal
    /// burst.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending deadline.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_debouncer_never_fires() {
        let mut d = Debouncer::new(100);
        assert!(!d.is_pending());
        assert!(!d.fire(0));
        assert!(!d.fire(u64::MAX));
    }

    #[test]
    fn fires_once_after_the_window_elapses() {
        let mut d = Debouncer::new(100);
        d.signal(1_000);

        assert!(!d.fire(1_050));
        assert!(d.is_pending());
        assert!(d.fire(1_100));
        // Cleared after firing.
        assert!(!d.is_pending());
        assert!(!d.fire(2_000));
    }

    #[test]
    fn newest_signal_replaces_the_pending_deadline() {
        let mut d = Debouncer::new(100);
        d.signal(1_000);
        d.signal(1_050);
        d.signal(1_090);

        // The original deadline has passed, but the burst kept pushing it.
        assert!(!d.fire(1_100));
        assert_eq!(d.deadline(), Some(1_190));
        assert!(d.fire(1_190));
    }

    #[test]
    fn cancel_drops_the_pending_deadline() {
        let mut d = Debouncer::new(100);
        d.signal(1_000);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(5_000));
    }

    #[test]
    fn zero_window_fires_immediately() {
        let mut d = Debouncer::new(0);
        d.signal(42);
        assert!(d.fire(42));
    }

    #[test]
    fn deadline_saturates_instead_of_overflowing() {
        let mut d = Debouncer::new(100);
        d.signal(u64::MAX - 10);
        assert_eq!(d.deadline(), Some(u64::MAX));
    }
}
