//! Wall-clock abstraction for watch-time accounting.

/// Source of millisecond timestamps.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real time from `chrono`; backed by `Date.now()` on wasm32.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

#[cfg(any(test, feature = "test-helpers"))]
pub use manual::ManualClock;

#[cfg(any(test, feature = "test-helpers"))]
mod manual {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::Clock;

    /// Hand-driven clock; clones share the same time.
    #[derive(Debug, Clone, Default)]
    pub struct ManualClock {
        now: Rc<Cell<u64>>,
    }

    impl ManualClock {
        pub fn starting_at(ms: u64) -> Self {
            let clock = Self::default();
            clock.now.set(ms);
            clock
        }

        pub fn advance(&self, ms: u64) {
            self.now.set(self.now.get() + ms);
        }
    }

    impl Clock for ManualClock {
        fn now_ms(&self) -> u64 {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::starting_at(1_000);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now_ms(), 1_250);
    }
}
