//! Auto-advance countdown.
//!
//! Driven by one-second ticks from the host. The countdown itself never
//! touches timers; it reports when the host must arm or cancel its interval.

/// Result of a one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// No countdown was running (stale tick after a stop)
    Idle,
    /// Still counting; seconds left
    Counting(u32),
    /// Reached zero; the next lesson is due
    Elapsed,
}

/// Auto-advance preference plus the ephemeral countdown.
#[derive(Debug, Clone, Default)]
pub struct AutoAdvance {
    enabled: bool,
    remaining: Option<u32>,
}

impl AutoAdvance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.remaining = None;
        }
    }

    /// A countdown is in progress.
    pub fn is_playing(&self) -> bool {
        self.remaining.is_some()
    }

    /// Seconds left, zero when idle.
    pub fn remaining_secs(&self) -> u32 {
        self.remaining.unwrap_or(0)
    }

    /// Start a fresh countdown, replacing any pending one.
    pub fn start(&mut self, delay_secs: u32) {
        self.remaining = Some(delay_secs.max(1));
    }

    /// Cancel the countdown and clear remaining time.
    pub fn stop(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    pub fn tick(&mut self) -> Tick {
        match self.remaining {
            None => Tick::Idle,
            Some(secs) if secs <= 1 => {
                self.remaining = None;
                Tick::Elapsed
            }
            Some(secs) => {
                self.remaining = Some(secs - 1);
                Tick::Counting(secs - 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_second_countdown_elapses_on_fifth_tick() {
        let mut auto = AutoAdvance::new();
        auto.start(5);
        assert_eq!(auto.remaining_secs(), 5);
        assert_eq!(auto.tick(), Tick::Counting(4));
        assert_eq!(auto.tick(), Tick::Counting(3));
        assert_eq!(auto.tick(), Tick::Counting(2));
        assert_eq!(auto.tick(), Tick::Counting(1));
        assert_eq!(auto.tick(), Tick::Elapsed);
        assert!(!auto.is_playing());
        assert_eq!(auto.tick(), Tick::Idle);
    }

    #[test]
    fn test_restart_replaces_pending_countdown() {
        let mut auto = AutoAdvance::new();
        auto.start(5);
        auto.tick();
        auto.tick();
        auto.start(5);
        assert_eq!(auto.remaining_secs(), 5);
    }

    #[test]
    fn test_stop_clears_remaining() {
        let mut auto = AutoAdvance::new();
        auto.start(3);
        assert!(auto.stop());
        assert_eq!(auto.remaining_secs(), 0);
        assert!(!auto.stop());
    }

    #[test]
    fn test_disabling_stops_countdown() {
        let mut auto = AutoAdvance::new();
        auto.set_enabled(true);
        auto.start(5);
        auto.set_enabled(false);
        assert!(!auto.is_playing());
        assert!(!auto.is_enabled());
    }
}
