//! Focus fog.
//!
//! A visual penalty that builds up while the user is away from the page
//! during a running focus session and clears while they stay.

pub mod state;
pub mod strategy;

pub use state::{FogDelta, FogIntervals, FogState, FOG_STEP, MAX_FOG_STEPS};
pub use strategy::{AccumulatorStrategy, AwayStrategy, CounterKind, PresentStrategy};
