//! Output formatting for pomofog.
//!
//! This module provides formatters for displaying configuration in various formats.

mod json;
mod pretty;

use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomofogError;

pub use json::*;
pub use pretty::*;

/// Format the effective configuration based on output format
///
/// # Errors
///
/// Returns `PomofogError::Parse` if JSON serialization fails.
pub fn format_config(
    config: &Config,
    source: &Path,
    format: OutputFormat,
) -> Result<String, PomofogError> {
    match format {
        OutputFormat::Pretty => Ok(format_config_pretty(config, source)),
        OutputFormat::Json => format_config_json(config, source),
    }
}
