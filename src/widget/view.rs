//! Read-only snapshot of the widget for rendering.

use crate::features::focus::{
    format_time, progress_degrees, progress_fraction, SessionKind, FOCUS_CYCLE_LENGTH,
};

use super::FocusWidget;

/// Everything the presentation surface needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetView {
    /// Remaining time as `M:SS`
    pub time_text: String,
    /// Elapsed share of the session (0.0 - 1.0)
    pub progress: f64,
    /// Elapsed share mapped to the half dial (0 - 180)
    pub progress_degrees: f64,
    pub session: SessionKind,
    pub is_running: bool,
    /// Fog overlay opacity (0.0 - 1.0)
    pub fog_opacity: f64,
    /// The fog overlay is drawn at all
    pub fog_visible: bool,
    /// Session tracker indicators, filled for completed focus sessions
    pub tracker: [bool; FOCUS_CYCLE_LENGTH as usize],
}

impl WidgetView {
    #[must_use]
    pub fn of(widget: &FocusWidget) -> Self {
        let timer = widget.timer();
        let fog = widget.fog();
        let left = timer.time_left_seconds();
        let total = timer.current_session_duration_seconds();

        let mut tracker = [false; FOCUS_CYCLE_LENGTH as usize];
        for (i, slot) in tracker.iter_mut().enumerate() {
            *slot = u32::try_from(i).is_ok_and(|i| i < timer.tracker_filled());
        }

        Self {
            time_text: format_time(left),
            progress: progress_fraction(left, total),
            progress_degrees: progress_degrees(left, total),
            session: timer.kind(),
            is_running: timer.is_running(),
            fog_opacity: fog.opacity(),
            fog_visible: fog.is_visible(),
            tracker,
        }
    }
}
