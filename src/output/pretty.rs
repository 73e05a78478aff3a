use std::path::Path;

use colored::Colorize;

use crate::config::Config;

/// Format the configuration as a human-readable summary
pub fn format_config_pretty(config: &Config, source: &Path) -> String {
    let origin = if source.exists() {
        source.display().to_string()
    } else {
        format!("{} (not found, using defaults)", source.display())
    };

    let mut output = format!("{} {}\n", "Config".bold(), origin.dimmed());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    let rows = [
        ("Focus", config.timer.focus_minutes, "min"),
        ("Short break", config.timer.short_break_minutes, "min"),
        ("Long break", config.timer.long_break_minutes, "min"),
        ("Fog increase every", config.fog.increase_interval_minutes, "min"),
        ("Fog decrease every", config.fog.decrease_interval_minutes, "min"),
    ];
    for (label, value, unit) in rows {
        output.push_str(&format!("  {:<20} {} {}\n", label.dimmed(), value.to_string().cyan(), unit));
    }

    output.push_str(&format!(
        "  {:<20} {} rows\n",
        "Mini bar after".dimmed(),
        config.tui.mini_bar_threshold_rows.to_string().cyan()
    ));

    output
}
