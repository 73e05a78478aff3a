//! Feature implementations for pomofog.
//!
//! This module contains the building blocks of the widget:
//! - Focus/break session timer
//! - Focus fog
//! - Settings form
//! - Task list

pub mod focus;
pub mod fog;
pub mod settings;
pub mod tasks;
