use std::time::{Duration, Instant};

use crate::boundary::Clock;

/// Polled interval timer driving the terminal game loop.
///
/// Starting records a fresh phase, so a restart always waits a full interval
/// before the next tick.
#[derive(Debug, Clone, Default)]
pub struct IntervalClock {
    interval: Option<Duration>,
    last_tick: Option<Instant>,
}

impl IntervalClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts ticking with `now` as the phase origin.
    pub fn start_ticking_at(&mut self, interval: Duration, now: Instant) {
        self.interval = Some(interval);
        self.last_tick = Some(now);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Returns true once per elapsed interval while running.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        let (Some(interval), Some(last_tick)) = (self.interval, self.last_tick) else {
            return false;
        };

        if now.saturating_duration_since(last_tick) < interval {
            return false;
        }

        self.last_tick = Some(now);
        true
    }
}

impl Clock for IntervalClock {
    fn start_ticking(&mut self, interval: Duration) {
        self.start_ticking_at(interval, Instant::now());
    }

    fn stop_ticking(&mut self) {
        self.interval = None;
        self.last_tick = None;
    }
}
