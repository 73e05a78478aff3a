//! Core abstractions for pomofog.
//!
//! This module provides the cooperative scheduling primitives shared by the
//! widget and the terminal front end.

mod interval;
mod visibility;

pub use interval::Interval;
pub use visibility::Visibility;
