//! Trailing-edge debounce with an injectable clock
//!
//! Raw pointer-move events can arrive far faster than the frame rate.
//! Position-change notifications pass through a trailing-edge debouncer so
//! listeners see at most one update per window, and always see the final
//! value of a burst. The clock is a trait so tests drive time by hand
//! instead of sleeping.

use std::time::{Duration, Instant};

/// Monotonic time source for debouncing
pub trait Clock: Send + Sync {
    /// Time elapsed since some fixed origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`
#[derive(Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Trailing-edge debouncer: pending value + deadline, no hidden timers
///
/// `push` stores the newest value and arms a deadline if none is armed;
/// `poll` releases the pending value once the deadline passes; `flush`
/// releases it unconditionally (gesture end). Callers are expected to poll
/// once per frame while a gesture or animation is live.
#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<T>,
    deadline: Option<Duration>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            deadline: None,
        }
    }

    /// Whether a value is waiting for its deadline
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Offer a value; returns it immediately if a previous deadline has
    /// already expired, otherwise holds it for `poll`/`flush`
    pub fn push(&mut self, value: T, now: Duration) -> Option<T> {
        self.pending = Some(value);
        if self.deadline.is_none() {
            self.deadline = Some(now + self.window);
            return None;
        }
        self.poll(now)
    }

    /// Release the pending value if the deadline has passed
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }

    /// Release the pending value regardless of the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.deadline = None;
        self.pending.take()
    }

    /// Drop any pending value without releasing it
    pub fn clear(&mut self) {
        self.deadline = None;
        self.pending = None;
    }
}

#[cfg(test)]
pub(crate) mod test_clock {
    use super::Clock;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::Duration;

    /// Hand-driven clock for deterministic debounce tests
    #[derive(Default)]
    pub struct ManualClock {
        now_ms: AtomicU64,
    }

    impl ManualClock {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_ms(&self, ms: u64) {
            self.now_ms.store(ms, Ordering::SeqCst);
        }

        pub fn advance_ms(&self, ms: u64) {
            self.now_ms.fetch_add(ms, Ordering::SeqCst);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            Duration::from_millis(self.now_ms.load(Ordering::SeqCst))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(16);

    fn at(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_first_push_is_held() {
        let mut debouncer = Debouncer::new(WINDOW);
        assert_eq!(debouncer.push(1.0, at(0)), None);
        assert!(debouncer.has_pending());
    }

    #[test]
    fn test_trailing_value_wins() {
        let mut debouncer = Debouncer::new(WINDOW);
        debouncer.push(1.0, at(0));
        debouncer.push(2.0, at(5));
        debouncer.push(3.0, at(10));

        // Nothing until the window elapses, then only the newest value
        assert_eq!(debouncer.poll(at(15)), None);
        assert_eq!(debouncer.poll(at(16)), Some(3.0));
        assert_eq!(debouncer.poll(at(32)), None);
    }

    #[test]
    fn test_push_after_deadline_releases() {
        let mut debouncer = Debouncer::new(WINDOW);
        debouncer.push(1.0, at(0));

        assert_eq!(debouncer.push(2.0, at(20)), Some(2.0));
        assert!(!debouncer.has_pending());
    }

    #[test]
    fn test_flush_bypasses_deadline() {
        let mut debouncer = Debouncer::new(WINDOW);
        debouncer.push(7.0, at(0));

        assert_eq!(debouncer.flush(), Some(7.0));
        assert_eq!(debouncer.flush(), None);
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut debouncer = Debouncer::new(WINDOW);
        debouncer.push(7.0, at(0));
        debouncer.clear();

        assert_eq!(debouncer.poll(at(100)), None);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = test_clock::ManualClock::new();
        assert_eq!(clock.now(), at(0));
        clock.advance_ms(16);
        assert_eq!(clock.now(), at(16));
    }
}
