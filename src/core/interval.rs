//! Cooperative periodic callbacks.
//!
//! An [`Interval`] does not run anything by itself. The owner polls it with
//! the current time and performs the tick when it reports one is due.

use std::time::{Duration, Instant};

/// A repeating timer with a fixed period.
///
/// Fires at most once per poll. If the owner was not polled for several
/// periods the missed ticks are dropped rather than replayed.
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    /// Create a stopped interval.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Create a stopped one-second interval.
    #[must_use]
    pub const fn every_second() -> Self {
        Self::new(Duration::from_secs(1))
    }

    /// Arm the interval; the first tick is one period after `now`.
    ///
    /// Restarting an armed interval moves its schedule.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Disarm the interval.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Report whether a tick is due at `now`, advancing the schedule if so.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let mut next = due + self.period;
                if next <= now {
                    next = now + self.period;
                }
                self.next_due = Some(next);
                true
            }
            _ => false,
        }
    }
}
