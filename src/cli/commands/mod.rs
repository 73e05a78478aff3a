//! Command implementations.

mod completions;
mod config;
mod tui;

pub use completions::completions;
pub use config::config;
pub use tui::{effective_settings, tui};
