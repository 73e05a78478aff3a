//! Countdown formatting and progress helpers.
//!
//! Provides the `M:SS` readout and the half-dial progress values.

/// Degrees swept by the progress dial when a session is complete.
pub const DIAL_SWEEP_DEGREES: f64 = 180.0;

/// Format seconds as `M:SS`.
///
/// Minutes are not padded; seconds always have two digits.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes}:{seconds:02}")
}

/// Fraction of the session already elapsed (0.0 - 1.0).
///
/// A zero total is treated as one second.
#[must_use]
pub fn progress_fraction(time_left_seconds: u32, total_seconds: u32) -> f64 {
    let total = f64::from(total_seconds.max(1));
    let left = f64::from(time_left_seconds);
    (1.0 - left / total).clamp(0.0, 1.0)
}

/// Progress mapped onto the half-circle dial, in degrees (0 - 180).
#[must_use]
pub fn progress_degrees(time_left_seconds: u32, total_seconds: u32) -> f64 {
    progress_fraction(time_left_seconds, total_seconds) * DIAL_SWEEP_DEGREES
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
