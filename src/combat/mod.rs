//! Combat module - health, collision outcomes, damage, and death.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::CombatPlugin;
