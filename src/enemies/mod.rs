//! Enemies module - enemy components and AI.

mod ai;
mod components;
mod plugin;

pub use ai::should_attack;
pub use components::*;
pub use plugin::EnemyPlugin;
