//! The focus widget.
//!
//! [`FocusWidget`] owns the only mutable session timer and fog state and the
//! three periodic callbacks that drive them: the session countdown, the away
//! counter and the inside counter. UI events call its operations; the event
//! loop calls [`FocusWidget::poll`] with the current time and redraws
//! afterwards.
//!
//! Pausing or resetting the timer never cancels a fog counter. The counters
//! check on every tick whether a focus session is running and do nothing
//! otherwise. A session boundary drops the counter; it is re-armed from the
//! boundary instant when the next focus session begins.

mod view;

pub use view::WidgetView;

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{Interval, Visibility};
use crate::features::focus::{SessionKind, SessionTimerState, TickOutcome, Transition};
use crate::features::fog::{
    AccumulatorStrategy, AwayStrategy, CounterKind, FogState, PresentStrategy,
};
use crate::features::settings::AppliedSettings;

/// A live fog counter and its schedule.
#[derive(Debug)]
struct FogCounter {
    interval: Interval,
    strategy: Box<dyn AccumulatorStrategy>,
    /// Wall-clock reference for elapsed time; only whole seconds are consumed.
    anchor: Instant,
}

impl FogCounter {
    fn new(strategy: Box<dyn AccumulatorStrategy>, now: Instant) -> Self {
        let mut interval = Interval::every_second();
        interval.start(now);
        Self {
            interval,
            strategy,
            anchor: now,
        }
    }

    fn kind(&self) -> CounterKind {
        self.strategy.kind()
    }

    fn take_elapsed_seconds(&mut self, now: Instant) -> u64 {
        let secs = now.saturating_duration_since(self.anchor).as_secs();
        self.anchor += Duration::from_secs(secs);
        secs
    }
}

/// Session timer plus focus fog.
#[derive(Debug)]
pub struct FocusWidget {
    timer: SessionTimerState,
    fog: FogState,
    visibility: Visibility,
    countdown: Interval,
    fog_counter: Option<FogCounter>,
}

impl FocusWidget {
    /// Create a widget with a paused Focus session and no fog.
    #[must_use]
    pub fn new(settings: AppliedSettings) -> Self {
        Self {
            timer: SessionTimerState::new(settings.durations),
            fog: FogState::new(settings.fog),
            visibility: Visibility::Visible,
            countdown: Interval::every_second(),
            fog_counter: None,
        }
    }

    /// Start the countdown. Does nothing if it is already running.
    pub fn start(&mut self, now: Instant) {
        if !self.timer.start() {
            return;
        }
        self.countdown.start(now);
        info!(session = ?self.timer.kind(), left = self.timer.time_left_seconds(), "Timer started");
        self.sync_fog_counter(now);
    }

    /// Stop the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        if self.timer.is_running() {
            info!(left = self.timer.time_left_seconds(), "Timer paused");
        }
        self.timer.pause();
        self.countdown.stop();
    }

    /// Pause when running, start otherwise.
    pub fn toggle(&mut self, now: Instant) {
        if self.timer.is_running() {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Back to a paused, full-length Focus session with no fog.
    pub fn reset(&mut self) {
        self.timer.reset();
        self.countdown.stop();
        self.fog.reset();
        info!("Timer reset");
    }

    /// Apply saved settings: new durations and fog thresholds, then a paused
    /// fresh Focus session with no fog.
    pub fn apply_settings(&mut self, settings: AppliedSettings) {
        self.fog.set_intervals(settings.fog);
        self.timer.apply_settings(settings.durations);
        self.countdown.stop();
        self.fog.reset();
        info!(
            focus = settings.durations.focus_seconds,
            short_break = settings.durations.short_break_seconds,
            long_break = settings.durations.long_break_seconds,
            fog_increase = settings.fog.increase_seconds,
            fog_decrease = settings.fog.decrease_seconds,
            "Settings applied"
        );
    }

    /// Handle a page visibility change.
    ///
    /// Only a running focus session reacts. Outside one the fog and the
    /// counters are left alone, but the new visibility is still recorded:
    /// the next start, or the next break ending, arms the counter that
    /// matches it. Hiding the terminal while paused and then starting
    /// therefore counts away time from the start.
    pub fn set_visibility(&mut self, visibility: Visibility, now: Instant) {
        self.visibility = visibility;

        if !self.timer.is_focus_running() {
            debug!(%visibility, "Visibility change ignored outside a running focus session");
            return;
        }

        debug!(%visibility, fog = self.fog.level(), "Visibility changed");
        match visibility {
            Visibility::Hidden => {
                self.fog_counter = Some(FogCounter::new(Box::new(AwayStrategy), now));
            }
            Visibility::Visible => {
                self.fog_counter = if self.fog.is_clear() {
                    None
                } else {
                    Some(FogCounter::new(Box::<PresentStrategy>::default(), now))
                };
            }
        }
    }

    /// Run every callback that is due at `now`.
    ///
    /// The countdown goes first, then the fog counter. Returns the session
    /// transition if one happened.
    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        let mut transition = None;

        if self.countdown.poll(now) {
            if let TickOutcome::Transitioned(t) = self.timer.tick() {
                self.finish_session(t, now);
                transition = Some(t);
            }
        }

        self.poll_fog_counter(now);
        transition
    }

    fn finish_session(&mut self, transition: Transition, now: Instant) {
        info!(
            from = ?transition.from,
            to = ?transition.to,
            completions = transition.completion_count,
            "Session finished"
        );

        if transition.reset_fog {
            self.fog.reset();
        }
        if transition.resume_countdown {
            self.countdown.start(now);
        }
        // Break time must not leak into the next focus session.
        self.fog_counter = None;
        self.sync_fog_counter(now);
    }

    /// Make sure the counter matching the current visibility is live when a
    /// focus session (re)starts.
    fn sync_fog_counter(&mut self, now: Instant) {
        if !self.timer.is_focus_running() {
            return;
        }

        let wanted = match self.visibility {
            Visibility::Hidden => Some(CounterKind::Away),
            Visibility::Visible if self.fog.is_visible() => Some(CounterKind::Inside),
            Visibility::Visible => None,
        };

        let current = self.fog_counter.as_ref().map(FogCounter::kind);
        if current == wanted {
            return;
        }

        self.fog_counter = wanted.map(|kind| {
            let strategy: Box<dyn AccumulatorStrategy> = match kind {
                CounterKind::Away => Box::new(AwayStrategy),
                CounterKind::Inside => Box::<PresentStrategy>::default(),
            };
            FogCounter::new(strategy, now)
        });
    }

    fn poll_fog_counter(&mut self, now: Instant) {
        let Some(counter) = self.fog_counter.as_mut() else {
            return;
        };
        if !counter.interval.poll(now) {
            return;
        }

        if !self.timer.is_focus_running() {
            // Time outside a running focus session never counts as away.
            counter.anchor = now;
            return;
        }

        let elapsed = counter.take_elapsed_seconds(now);
        let kind = counter.kind();
        let delta = counter.strategy.tick(&self.fog, elapsed);

        if self.fog.apply(delta) {
            debug!(
                level = self.fog.level(),
                away = self.fog.away_accumulated_seconds(),
                "Fog level changed"
            );
        }

        if kind == CounterKind::Inside && self.fog.is_clear() {
            self.fog_counter = None;
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> WidgetView {
        WidgetView::of(self)
    }

    #[must_use]
    pub const fn timer(&self) -> &SessionTimerState {
        &self.timer
    }

    #[must_use]
    pub const fn fog(&self) -> &FogState {
        &self.fog
    }

    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Which fog counter is live, if any.
    #[must_use]
    pub fn active_counter(&self) -> Option<CounterKind> {
        self.fog_counter.as_ref().map(FogCounter::kind)
    }

    /// Settings currently in effect.
    #[must_use]
    pub const fn settings(&self) -> AppliedSettings {
        AppliedSettings {
            durations: self.timer.durations(),
            fog: self.fog.intervals(),
        }
    }

    #[must_use]
    pub const fn session(&self) -> SessionKind {
        self.timer.kind()
    }
}
