//! JSON output formatting for pomofog.

use std::path::Path;

use serde_json::json;

use crate::config::Config;
use crate::error::PomofogError;

/// Format the configuration as JSON
///
/// # Errors
///
/// Returns `PomofogError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config, source: &Path) -> Result<String, PomofogError> {
    let output = json!({
        "source": source.display().to_string(),
        "exists": source.exists(),
        "config": config,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
