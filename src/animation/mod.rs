//! Animation module - frame timers and clips for animated sprites.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::SpriteAnimationPlugin;
