//! Configuration management for pomofog.
//!
//! This module handles loading and saving configuration from `~/.pomofog/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, FogConfig, TimerConfig, TuiConfig};
