//! Score module - distance score, pass bonus, high score and run pace.

mod plugin;
mod resources;
mod systems;

pub use plugin::ScorePlugin;
pub use resources::*;
