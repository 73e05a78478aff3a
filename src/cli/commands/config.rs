//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomofogError;
use crate::output::format_config;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read, parsed or written.
pub fn config(
    paths: &Paths,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PomofogError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            format_config(&config, &paths.config_file, format)
        }
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init_config(paths, force),
    }
}

fn init_config(paths: &Paths, force: bool) -> Result<String, PomofogError> {
    if paths.config_file.exists() && !force {
        return Err(PomofogError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;

    Ok(format!(
        "{} {}",
        "Wrote default config to".green(),
        paths.config_file.display()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_refuse_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".pomofog"));

        config(&paths, ConfigCommands::Init { force: false }, OutputFormat::Pretty).unwrap();
        assert!(paths.config_file.exists());

        let err = config(&paths, ConfigCommands::Init { force: false }, OutputFormat::Pretty)
            .unwrap_err();
        assert!(err.to_string().contains("--force"));

        config(&paths, ConfigCommands::Init { force: true }, OutputFormat::Pretty).unwrap();
    }

    #[test]
    fn test_show_json_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        let out = config(&paths, ConfigCommands::Show, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["config"]["timer"]["focus_minutes"], 25);
        assert_eq!(value["config"]["fog"]["decrease_interval_minutes"], 4);
    }

    #[test]
    fn test_path() {
        let paths = Paths::with_root(std::path::PathBuf::from("/tmp/pf"));
        let out = config(&paths, ConfigCommands::Path, OutputFormat::Pretty).unwrap();
        assert_eq!(out, "/tmp/pf/config.yaml");
    }
}
