//! Configuration settings for pomofog.
//!
//! Settings are loaded from `~/.pomofog/config.yaml`. They only seed the
//! widget at launch; changes made in the settings form are not written back.

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::PomofogError;
use crate::features::focus::SessionDurations;
use crate::features::fog::FogIntervals;
use crate::features::settings::AppliedSettings;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Session durations.
    pub timer: TimerConfig,
    /// Focus fog thresholds.
    pub fog: FogConfig,
    /// Terminal interface settings.
    pub tui: TuiConfig,
}

/// Session durations, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus session duration in minutes.
    #[serde(default = "default_focus")]
    pub focus_minutes: u32,
    /// Short break duration in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break duration in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
}

/// Fog thresholds, in minutes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FogConfig {
    /// Minutes away from the page per step of fog.
    #[serde(default = "default_fog_increase")]
    pub increase_interval_minutes: u32,
    /// Minutes on the page to clear one step of fog.
    #[serde(default = "default_fog_decrease")]
    pub decrease_interval_minutes: u32,
}

/// Terminal interface settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TuiConfig {
    /// Scroll offset past which the mini control bar replaces the dial.
    #[serde(default = "default_mini_bar_threshold")]
    pub mini_bar_threshold_rows: u16,
    /// Event poll timeout in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

// Default value functions for serde
const fn default_focus() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    35
}

const fn default_fog_increase() -> u32 {
    1
}

const fn default_fog_decrease() -> u32 {
    4
}

const fn default_mini_bar_threshold() -> u16 {
    8
}

const fn default_tick_rate() -> u64 {
    100
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
        }
    }
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            increase_interval_minutes: default_fog_increase(),
            decrease_interval_minutes: default_fog_decrease(),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            mini_bar_threshold_rows: default_mini_bar_threshold(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PomofogError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomofogError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomofogError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomofogError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomofogError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomofogError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            PomofogError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Durations and fog thresholds to seed the widget with.
    ///
    /// Zero values are floored to one minute.
    #[must_use]
    pub fn applied(&self) -> AppliedSettings {
        AppliedSettings {
            durations: SessionDurations::from_minutes(
                self.timer.focus_minutes,
                self.timer.short_break_minutes,
                self.timer.long_break_minutes,
            ),
            fog: FogIntervals::from_minutes(
                u64::from(self.fog.increase_interval_minutes),
                u64::from(self.fog.decrease_interval_minutes),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.timer.focus_minutes, 25);
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.timer.long_break_minutes, 35);
        assert_eq!(config.fog.increase_interval_minutes, 1);
        assert_eq!(config.fog.decrease_interval_minutes, 4);
        assert_eq!(config.tui.mini_bar_threshold_rows, 8);
    }

    #[test]
    fn test_default_applied_matches_widget_defaults() {
        let applied = Config::default().applied();

        assert_eq!(applied.durations, SessionDurations::default());
        assert_eq!(applied.fog, FogIntervals::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.focus_minutes = 50;
        config.fog.increase_interval_minutes = 2;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.focus_minutes, 50);
        assert_eq!(loaded.fog.increase_interval_minutes, 2);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  focus_minutes: 45
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.timer.focus_minutes, 45);
        // Defaults should be used for missing fields
        assert_eq!(config.timer.short_break_minutes, 5);
        assert_eq!(config.fog.decrease_interval_minutes, 4);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "timer: [not, a, map]").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PomofogError::Config(_)));
    }

    #[test]
    fn test_zero_minutes_are_floored() {
        let mut config = Config::default();
        config.timer.focus_minutes = 0;
        config.fog.decrease_interval_minutes = 0;

        let applied = config.applied();
        assert_eq!(applied.durations.focus_seconds, 60);
        assert_eq!(applied.fog.decrease_seconds, 60);
    }
}
