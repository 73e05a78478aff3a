//! Error types for pomofog.
//!
//! The timer, fog and task operations are total and never fail; errors only
//! come from the ambient layers (config files, the terminal, serialization).

use thiserror::Error;

/// Errors that can occur outside the core session logic.
#[derive(Debug, Error)]
pub enum PomofogError {
    /// Configuration could not be located, read, parsed or written.
    #[error("config error: {0}")]
    Config(String),

    /// The terminal could not be set up, drawn to, or read from.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Output could not be serialized.
    #[error("parse error: {0}")]
    Parse(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PomofogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
