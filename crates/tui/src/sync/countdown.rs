//! Per-screen refresh countdown.
//!
//! A countdown is driven by a one-second tick from the main loop. When the
//! remaining seconds reach zero the tick reports that a poll is due and the
//! countdown restarts at the full interval.

use gateway_config::RefreshInterval;

/// Seconds-remaining countdown for one polled screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    interval: Option<u64>,
    remaining: u64,
}

impl Countdown {
    /// Create a countdown with the given interval in seconds. `None` disables polling.
    pub fn new(interval_secs: Option<u64>) -> Self {
        let interval = interval_secs.filter(|secs| *secs > 0);
        Self {
            interval,
            remaining: interval.unwrap_or(0),
        }
    }

    /// Create a countdown from an operator-selectable interval.
    pub fn from_interval(interval: RefreshInterval) -> Self {
        Self::new(interval.seconds())
    }

    /// Create a countdown with a fixed interval.
    pub fn fixed(secs: u64) -> Self {
        Self::new(Some(secs))
    }

    /// Advance by one second. Returns `true` when a poll is due.
    pub fn tick(&mut self) -> bool {
        let Some(interval) = self.interval else {
            return false;
        };
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.remaining = interval;
            true
        } else {
            false
        }
    }

    /// Restart at the full interval, as after a manual refresh.
    pub fn reset(&mut self) {
        self.remaining = self.interval.unwrap_or(0);
    }

    /// Change the interval and reschedule the next poll immediately.
    pub fn set_interval(&mut self, interval_secs: Option<u64>) {
        *self = Self::new(interval_secs);
    }

    /// Seconds until the next poll, or `None` when polling is off.
    pub fn remaining(&self) -> Option<u64> {
        self.interval.map(|_| self.remaining)
    }

    pub fn interval_secs(&self) -> Option<u64> {
        self.interval
    }

    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }
}
