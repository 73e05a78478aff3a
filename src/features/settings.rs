//! Settings form.
//!
//! Fields hold raw text in minutes. Saving never fails: every field is
//! coerced to a number (anything unparseable counts as zero) and floored to
//! one minute.

use crate::features::focus::SessionDurations;
use crate::features::fog::FogIntervals;

/// Smallest value any field can take, in minutes.
pub const MIN_MINUTES: f64 = 1.0;

/// Index of a field in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Focus,
    ShortBreak,
    LongBreak,
    FogIncrease,
    FogDecrease,
}

impl SettingsField {
    pub const ALL: [Self; 5] = [
        Self::Focus,
        Self::ShortBreak,
        Self::LongBreak,
        Self::FogIncrease,
        Self::FogDecrease,
    ];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Focus => "Focus (min)",
            Self::ShortBreak => "Short break (min)",
            Self::LongBreak => "Long break (min)",
            Self::FogIncrease => "Fog increase every (min)",
            Self::FogDecrease => "Fog decrease every (min)",
        }
    }

    /// Next field, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous field, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Values produced by saving the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedSettings {
    pub durations: SessionDurations,
    pub fog: FogIntervals,
}

/// Raw text of the settings form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub focus: String,
    pub short_break: String,
    pub long_break: String,
    pub fog_increase: String,
    pub fog_decrease: String,
}

impl SettingsForm {
    /// Pre-fill the form from the settings currently in effect.
    #[must_use]
    pub fn from_applied(applied: &AppliedSettings) -> Self {
        Self {
            focus: format_minutes(u64::from(applied.durations.focus_seconds)),
            short_break: format_minutes(u64::from(applied.durations.short_break_seconds)),
            long_break: format_minutes(u64::from(applied.durations.long_break_seconds)),
            fog_increase: format_minutes(applied.fog.increase_seconds),
            fog_decrease: format_minutes(applied.fog.decrease_seconds),
        }
    }

    #[must_use]
    pub fn field(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::Focus => &self.focus,
            SettingsField::ShortBreak => &self.short_break,
            SettingsField::LongBreak => &self.long_break,
            SettingsField::FogIncrease => &self.fog_increase,
            SettingsField::FogDecrease => &self.fog_decrease,
        }
    }

    pub fn field_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::Focus => &mut self.focus,
            SettingsField::ShortBreak => &mut self.short_break,
            SettingsField::LongBreak => &mut self.long_break,
            SettingsField::FogIncrease => &mut self.fog_increase,
            SettingsField::FogDecrease => &mut self.fog_decrease,
        }
    }

    /// Coerce every field and write the normalized values back.
    pub fn normalize(&mut self) -> AppliedSettings {
        let focus = coerce_minutes(&self.focus);
        let short_break = coerce_minutes(&self.short_break);
        let long_break = coerce_minutes(&self.long_break);
        let fog_increase = coerce_minutes(&self.fog_increase);
        let fog_decrease = coerce_minutes(&self.fog_decrease);

        self.focus = display_minutes(focus);
        self.short_break = display_minutes(short_break);
        self.long_break = display_minutes(long_break);
        self.fog_increase = display_minutes(fog_increase);
        self.fog_decrease = display_minutes(fog_decrease);

        AppliedSettings {
            durations: SessionDurations {
                focus_seconds: minutes_to_seconds_u32(focus),
                short_break_seconds: minutes_to_seconds_u32(short_break),
                long_break_seconds: minutes_to_seconds_u32(long_break),
            },
            fog: FogIntervals {
                increase_seconds: minutes_to_seconds(fog_increase),
                decrease_seconds: minutes_to_seconds(fog_decrease),
            },
        }
    }
}

/// Parse a minutes field, floored to [`MIN_MINUTES`].
#[must_use]
pub fn coerce_minutes(raw: &str) -> f64 {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);
    value.max(MIN_MINUTES)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn minutes_to_seconds(minutes: f64) -> u64 {
    (minutes * 60.0).round().max(1.0) as u64
}

fn minutes_to_seconds_u32(minutes: f64) -> u32 {
    u32::try_from(minutes_to_seconds(minutes)).unwrap_or(u32::MAX)
}

fn format_minutes(seconds: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    display_minutes(seconds as f64 / 60.0)
}

fn display_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.0}")
    } else {
        format!("{minutes}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(values: [&str; 5]) -> SettingsForm {
        SettingsForm {
            focus: values[0].to_string(),
            short_break: values[1].to_string(),
            long_break: values[2].to_string(),
            fog_increase: values[3].to_string(),
            fog_decrease: values[4].to_string(),
        }
    }

    #[test]
    fn test_normalize_plain_values() {
        let mut f = form(["30", "5", "20", "1", "4"]);
        let applied = f.normalize();

        assert_eq!(applied.durations.focus_seconds, 1800);
        assert_eq!(applied.durations.short_break_seconds, 300);
        assert_eq!(applied.durations.long_break_seconds, 1200);
        assert_eq!(applied.fog.increase_seconds, 60);
        assert_eq!(applied.fog.decrease_seconds, 240);
    }

    #[test]
    fn test_normalize_floors_to_one_minute() {
        let mut f = form(["0", "-3", "abc", "", "0.2"]);
        let applied = f.normalize();

        assert_eq!(applied.durations.focus_seconds, 60);
        assert_eq!(applied.durations.short_break_seconds, 60);
        assert_eq!(applied.durations.long_break_seconds, 60);
        assert_eq!(applied.fog.increase_seconds, 60);
        assert_eq!(applied.fog.decrease_seconds, 60);
        assert_eq!(f, form(["1", "1", "1", "1", "1"]));
    }

    #[test]
    fn test_normalize_keeps_fractional_minutes() {
        let mut f = form(["2.5", "1", "1", "1", "1"]);
        let applied = f.normalize();

        assert_eq!(applied.durations.focus_seconds, 150);
        assert_eq!(f.focus, "2.5");
    }

    #[test]
    fn test_non_finite_input_is_zero() {
        assert_eq!(coerce_minutes("inf"), MIN_MINUTES);
        assert_eq!(coerce_minutes("NaN"), MIN_MINUTES);
        assert_eq!(coerce_minutes(" 12 "), 12.0);
    }

    #[test]
    fn test_from_applied_round_trips_defaults() {
        let applied = AppliedSettings {
            durations: SessionDurations::default(),
            fog: FogIntervals::default(),
        };
        let mut f = SettingsForm::from_applied(&applied);
        assert_eq!(f.focus, "25");
        assert_eq!(f.long_break, "35");
        assert_eq!(f.fog_decrease, "4");
        assert_eq!(f.normalize(), applied);
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(SettingsField::Focus.next(), SettingsField::ShortBreak);
        assert_eq!(SettingsField::FogDecrease.next(), SettingsField::Focus);
        assert_eq!(SettingsField::Focus.previous(), SettingsField::FogDecrease);
    }
}
