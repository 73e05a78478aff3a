//! Logging setup.
//!
//! The TUI owns the terminal, so log events go to `~/.pomofog/logs/pomofog.log`.
//! `RUST_LOG` selects the filter (default `info`); `POMOFOG_DEBUG_LOG=1`
//! forces `debug`.

use std::env;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Paths;
use crate::error::PomofogError;

/// Log file name inside the logs directory.
pub const LOG_FILE: &str = "pomofog.log";

/// Install the global subscriber.
///
/// Keep the returned guard alive for as long as events should be flushed.
///
/// # Errors
///
/// Returns an error if the logs directory cannot be created.
pub fn init_logging(paths: &Paths) -> Result<WorkerGuard, PomofogError> {
    paths.ensure_dirs()?;

    let appender = tracing_appender::rolling::never(&paths.logs, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| PomofogError::Config(format!("Failed to install logger: {e}")))?;

    Ok(guard)
}

fn filter() -> EnvFilter {
    let debug_enabled = env::var("POMOFOG_DEBUG_LOG")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);
    if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}
