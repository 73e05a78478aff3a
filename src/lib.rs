//! pomofog - A terminal Pomodoro timer with a focus fog
//!
//! This crate provides a focus/break session timer, a "fog" that builds up
//! while the user is away from the terminal during a focus session, and a
//! small task list, wired into a ratatui interface.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;
pub mod widget;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomofogError;
pub use widget::{FocusWidget, WidgetView};
