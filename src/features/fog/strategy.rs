//! Fog counters.
//!
//! While the page is hidden the away counter banks real elapsed time, since
//! its ticks may be throttled. While the page is visible the inside counter
//! simply counts ticks.

use super::state::{FogDelta, FogState};

/// Which counter a strategy implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    /// Page hidden; fog builds up
    Away,
    /// Page visible; fog clears
    Inside,
}

/// One periodic fog counter.
pub trait AccumulatorStrategy: std::fmt::Debug {
    /// Handle one tick. `elapsed_real_seconds` is the wall-clock time since
    /// the previous tick, in whole seconds.
    fn tick(&mut self, fog: &FogState, elapsed_real_seconds: u64) -> FogDelta;

    /// Which counter this is.
    fn kind(&self) -> CounterKind;
}

/// Builds fog from time spent away.
#[derive(Debug, Default, Clone)]
pub struct AwayStrategy;

impl AccumulatorStrategy for AwayStrategy {
    fn tick(&mut self, fog: &FogState, elapsed_real_seconds: u64) -> FogDelta {
        let interval = fog.intervals().increase_seconds.max(1);
        let banked = fog.away_accumulated_seconds() + elapsed_real_seconds;

        FogDelta::Thicken {
            steps: banked / interval,
            carry_seconds: banked % interval,
        }
    }

    fn kind(&self) -> CounterKind {
        CounterKind::Away
    }
}

/// Clears fog while the user stays on the page.
#[derive(Debug, Default, Clone)]
pub struct PresentStrategy {
    inside_seconds: u64,
}

impl PresentStrategy {
    #[must_use]
    pub const fn inside_seconds(&self) -> u64 {
        self.inside_seconds
    }
}

impl AccumulatorStrategy for PresentStrategy {
    fn tick(&mut self, fog: &FogState, _elapsed_real_seconds: u64) -> FogDelta {
        self.inside_seconds += 1;

        if self.inside_seconds >= fog.intervals().decrease_seconds {
            self.inside_seconds = 0;
            FogDelta::Thin
        } else {
            FogDelta::Unchanged
        }
    }

    fn kind(&self) -> CounterKind {
        CounterKind::Inside
    }
}
