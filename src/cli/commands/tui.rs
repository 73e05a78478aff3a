//! TUI command implementation.

use tracing::info;

use crate::cli::args::TuiArgs;
use crate::config::Config;
use crate::error::PomofogError;
use crate::features::settings::{AppliedSettings, SettingsForm};

/// Launch the interactive timer.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn tui(config: &Config, args: TuiArgs) -> Result<String, PomofogError> {
    let settings = effective_settings(config, args);
    info!(?settings, "Launching TUI");
    crate::tui::run(settings, &config.tui)?;
    Ok(String::new())
}

/// Merge command-line overrides into the configured settings.
///
/// Overrides go through the same coercion as the settings form.
#[must_use]
pub fn effective_settings(config: &Config, args: TuiArgs) -> AppliedSettings {
    let mut form = SettingsForm::from_applied(&config.applied());

    let overrides = [
        (&mut form.focus, args.focus),
        (&mut form.short_break, args.short_break),
        (&mut form.long_break, args.long_break),
        (&mut form.fog_increase, args.fog_increase),
        (&mut form.fog_decrease, args.fog_decrease),
    ];
    for (field, value) in overrides {
        if let Some(value) = value {
            *field = value;
        }
    }

    form.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = Config::default();
        let settings = effective_settings(&config, TuiArgs::default());
        assert_eq!(settings, config.applied());
    }

    #[test]
    fn test_overrides_are_coerced() {
        let config = Config::default();
        let args = TuiArgs {
            focus: Some("50".to_string()),
            short_break: Some("nope".to_string()),
            fog_increase: Some("0".to_string()),
            ..TuiArgs::default()
        };

        let settings = effective_settings(&config, args);
        assert_eq!(settings.durations.focus_seconds, 3000);
        assert_eq!(settings.durations.short_break_seconds, 60);
        assert_eq!(settings.durations.long_break_seconds, 2100);
        assert_eq!(settings.fog.increase_seconds, 60);
        assert_eq!(settings.fog.decrease_seconds, 240);
    }
}
