//! Pomodoro session timer.
//!
//! Provides the focus/break state machine and its countdown display:
//! - Focus, short break and long break sessions
//! - Long break after every fourth completed focus session
//! - `M:SS` readout and half-dial progress

pub mod session;
pub mod timer;

pub use session::{
    SessionDurations, SessionKind, SessionTimerState, TickOutcome, Transition, FOCUS_CYCLE_LENGTH,
};
pub use timer::{format_time, progress_degrees, progress_fraction, render_progress_bar};
