//! Command-line interface for pomofog.

pub mod args;
pub mod commands;
