//! Session timer state machine.
//!
//! A fresh timer starts in a paused Focus session. Every completed Focus
//! session counts toward a cycle of four; the fourth completion routes to a
//! long break and restarts the cycle, earlier ones route to a short break.
//! Breaks always lead back to Focus.

/// Number of completed focus sessions that earns a long break.
pub const FOCUS_CYCLE_LENGTH: u32 = 4;

/// Kind of session currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// Work interval
    Focus,
    /// Rest after focus completions 1 to 3 of a cycle
    ShortBreak,
    /// Rest after the fourth focus completion of a cycle
    LongBreak,
}

impl SessionKind {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus Session",
            Self::ShortBreak => "Short Break Session",
            Self::LongBreak => "Long Break Session",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Durations of the three session kinds, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDurations {
    pub focus_seconds: u32,
    pub short_break_seconds: u32,
    pub long_break_seconds: u32,
}

impl SessionDurations {
    /// Build durations from whole minutes, each floored to one minute.
    #[must_use]
    pub fn from_minutes(focus: u32, short_break: u32, long_break: u32) -> Self {
        Self {
            focus_seconds: focus.max(1).saturating_mul(60),
            short_break_seconds: short_break.max(1).saturating_mul(60),
            long_break_seconds: long_break.max(1).saturating_mul(60),
        }
    }

    /// Duration of the given session kind.
    #[must_use]
    pub const fn for_kind(&self, kind: SessionKind) -> u32 {
        match kind {
            SessionKind::Focus => self.focus_seconds,
            SessionKind::ShortBreak => self.short_break_seconds,
            SessionKind::LongBreak => self.long_break_seconds,
        }
    }
}

impl Default for SessionDurations {
    fn default() -> Self {
        Self {
            focus_seconds: 25 * 60,
            short_break_seconds: 5 * 60,
            long_break_seconds: 35 * 60,
        }
    }
}

/// Edge taken when a session runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Kind of the session that just finished
    pub from: SessionKind,
    /// Kind of the session that now begins
    pub to: SessionKind,
    /// Completion count after the edge was applied
    pub completion_count: u32,
    /// The fog must be cleared before the next session runs
    pub reset_fog: bool,
    /// The countdown must be re-armed immediately for the next session
    pub resume_countdown: bool,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The timer was not running; nothing changed.
    Idle,
    /// One second elapsed and the session goes on.
    Counting,
    /// The session reached zero and the state machine moved on.
    Transitioned(Transition),
}

/// Countdown state of the session timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimerState {
    durations: SessionDurations,
    time_left_seconds: u32,
    current_session_duration_seconds: u32,
    kind: SessionKind,
    is_running: bool,
    focus_completion_count: u32,
    tracker_filled: u32,
}

impl SessionTimerState {
    /// Create a paused Focus session with the given durations.
    #[must_use]
    pub const fn new(durations: SessionDurations) -> Self {
        Self {
            durations,
            time_left_seconds: durations.focus_seconds,
            current_session_duration_seconds: durations.focus_seconds,
            kind: SessionKind::Focus,
            is_running: false,
            focus_completion_count: 0,
            tracker_filled: 0,
        }
    }

    /// Mark the timer as running.
    ///
    /// Returns false when it was already running, in which case the caller
    /// must not arm a second countdown.
    pub fn start(&mut self) -> bool {
        if self.is_running {
            return false;
        }
        self.is_running = true;
        true
    }

    /// Stop counting down without touching anything else.
    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Go back to a paused, full-length Focus session at the start of a cycle.
    pub fn reset(&mut self) {
        self.pause();
        self.kind = SessionKind::Focus;
        self.focus_completion_count = 0;
        self.tracker_filled = 0;
        self.begin(SessionKind::Focus);
    }

    /// Replace the durations and restart a paused Focus session.
    ///
    /// The completion count carries over.
    pub fn apply_settings(&mut self, durations: SessionDurations) {
        self.durations = durations;
        self.pause();
        self.kind = SessionKind::Focus;
        self.begin(SessionKind::Focus);
    }

    /// Count one second down.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running {
            return TickOutcome::Idle;
        }

        self.time_left_seconds = self.time_left_seconds.saturating_sub(1);

        if self.time_left_seconds == 0 {
            TickOutcome::Transitioned(self.transition())
        } else {
            TickOutcome::Counting
        }
    }

    /// Apply the session-boundary edge of the state machine.
    ///
    /// The timer stays running; the returned instruction tells the caller to
    /// re-arm the countdown for the new session.
    pub fn transition(&mut self) -> Transition {
        let from = self.kind;

        let to = if from == SessionKind::Focus {
            self.focus_completion_count += 1;
            self.tracker_filled = self.focus_completion_count;

            if self.focus_completion_count >= FOCUS_CYCLE_LENGTH {
                self.focus_completion_count = 0;
                SessionKind::LongBreak
            } else {
                SessionKind::ShortBreak
            }
        } else {
            if from == SessionKind::LongBreak {
                self.tracker_filled = self.focus_completion_count;
            }
            SessionKind::Focus
        };

        self.kind = to;
        self.begin(to);

        Transition {
            from,
            to,
            completion_count: self.focus_completion_count,
            reset_fog: true,
            resume_countdown: true,
        }
    }

    fn begin(&mut self, kind: SessionKind) {
        let duration = self.durations.for_kind(kind);
        self.current_session_duration_seconds = duration;
        self.time_left_seconds = duration;
    }

    /// Check whether a focus session is counting down right now.
    #[must_use]
    pub fn is_focus_running(&self) -> bool {
        self.is_running && self.kind == SessionKind::Focus
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    #[must_use]
    pub const fn time_left_seconds(&self) -> u32 {
        self.time_left_seconds
    }

    #[must_use]
    pub const fn current_session_duration_seconds(&self) -> u32 {
        self.current_session_duration_seconds
    }

    #[must_use]
    pub const fn focus_completion_count(&self) -> u32 {
        self.focus_completion_count
    }

    /// Number of session tracker indicators shown as filled.
    #[must_use]
    pub const fn tracker_filled(&self) -> u32 {
        self.tracker_filled
    }

    #[must_use]
    pub const fn durations(&self) -> SessionDurations {
        self.durations
    }
}

impl Default for SessionTimerState {
    fn default() -> Self {
        Self::new(SessionDurations::default())
    }
}
