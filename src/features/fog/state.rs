//! Fog level and away-time bookkeeping.

/// Change in fog level per step.
pub const FOG_STEP: f64 = 0.2;

/// Number of steps between a clear screen and full fog.
pub const MAX_FOG_STEPS: u8 = 5;

/// Thresholds that drive the fog counters, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FogIntervals {
    /// Away time needed for one step of fog
    pub increase_seconds: u64,
    /// Inside time needed to clear one step of fog
    pub decrease_seconds: u64,
}

impl FogIntervals {
    /// Build intervals from whole minutes, each floored to one minute.
    #[must_use]
    pub fn from_minutes(increase: u64, decrease: u64) -> Self {
        Self {
            increase_seconds: increase.max(1).saturating_mul(60),
            decrease_seconds: decrease.max(1).saturating_mul(60),
        }
    }
}

impl Default for FogIntervals {
    fn default() -> Self {
        Self {
            increase_seconds: 60,
            decrease_seconds: 4 * 60,
        }
    }
}

/// Change requested by a fog counter tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogDelta {
    /// Nothing to apply.
    Unchanged,
    /// Away time was banked; `steps` may be zero.
    Thicken {
        /// Steps of fog to add
        steps: u64,
        /// Away seconds left over after the steps were paid for
        carry_seconds: u64,
    },
    /// Clear one step of fog.
    Thin,
}

/// Current fog of the focus session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FogState {
    steps: u8,
    away_accumulated_seconds: u64,
    intervals: FogIntervals,
}

impl FogState {
    #[must_use]
    pub fn new(intervals: FogIntervals) -> Self {
        Self {
            intervals,
            ..Self::default()
        }
    }

    /// Fog intensity in [0, 1].
    #[must_use]
    pub fn level(&self) -> f64 {
        f64::from(self.steps) * FOG_STEP
    }

    /// Opacity of the fog overlay; identical to the level.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.level()
    }

    /// The overlay is hidden entirely at zero fog.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.steps > 0
    }

    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.steps == 0
    }

    #[must_use]
    pub const fn steps(&self) -> u8 {
        self.steps
    }

    #[must_use]
    pub const fn away_accumulated_seconds(&self) -> u64 {
        self.away_accumulated_seconds
    }

    #[must_use]
    pub const fn intervals(&self) -> FogIntervals {
        self.intervals
    }

    /// Replace the thresholds; level and banked time are kept.
    pub fn set_intervals(&mut self, intervals: FogIntervals) {
        self.intervals = intervals;
    }

    /// Clear all fog and forget banked away time.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.away_accumulated_seconds = 0;
    }

    /// Apply a counter result. Returns true if the level changed.
    pub fn apply(&mut self, delta: FogDelta) -> bool {
        let before = self.steps;
        match delta {
            FogDelta::Unchanged => {}
            FogDelta::Thicken {
                steps,
                carry_seconds,
            } => {
                let added = u8::try_from(steps).unwrap_or(MAX_FOG_STEPS);
                self.steps = self.steps.saturating_add(added).min(MAX_FOG_STEPS);
                self.away_accumulated_seconds = carry_seconds;
            }
            FogDelta::Thin => {
                self.steps = self.steps.saturating_sub(1);
            }
        }
        self.steps != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fog_is_clear() {
        let fog = FogState::new(FogIntervals::default());
        assert_eq!(fog.level(), 0.0);
        assert!(!fog.is_visible());
        assert_eq!(fog.away_accumulated_seconds(), 0);
    }

    #[test]
    fn test_thicken_clamps_to_full() {
        let mut fog = FogState::default();
        assert!(fog.apply(FogDelta::Thicken {
            steps: 9,
            carry_seconds: 12,
        }));
        assert_eq!(fog.steps(), MAX_FOG_STEPS);
        assert!((fog.level() - 1.0).abs() < 1e-9);
        assert_eq!(fog.away_accumulated_seconds(), 12);

        assert!(!fog.apply(FogDelta::Thicken {
            steps: 1,
            carry_seconds: 0,
        }));
        assert_eq!(fog.steps(), MAX_FOG_STEPS);
    }

    #[test]
    fn test_thin_clamps_to_zero() {
        let mut fog = FogState::default();
        assert!(!fog.apply(FogDelta::Thin));
        assert_eq!(fog.steps(), 0);

        fog.apply(FogDelta::Thicken {
            steps: 1,
            carry_seconds: 0,
        });
        assert!(fog.apply(FogDelta::Thin));
        assert!(fog.is_clear());
    }

    #[test]
    fn test_reset_clears_banked_time() {
        let mut fog = FogState::default();
        fog.apply(FogDelta::Thicken {
            steps: 2,
            carry_seconds: 30,
        });
        fog.reset();
        assert_eq!(fog.level(), 0.0);
        assert_eq!(fog.away_accumulated_seconds(), 0);
    }

    #[test]
    fn test_intervals_from_minutes() {
        let intervals = FogIntervals::from_minutes(0, 4);
        assert_eq!(intervals.increase_seconds, 60);
        assert_eq!(intervals.decrease_seconds, 240);
    }
}
