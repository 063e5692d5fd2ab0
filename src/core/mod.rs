//! Core game module - states, events, errors, config and frame ordering.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod error;
mod events;
mod plugin;
mod states;

pub use config::*;
pub use error::RunnerError;
pub use events::*;
pub use plugin::{CorePlugin, RunSet};
pub use states::*;
