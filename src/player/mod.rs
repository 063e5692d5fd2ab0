//! Player module - player entity, jumping and gravity.

mod components;
mod movement;
mod plugin;

pub use components::*;
pub use movement::{spawn_player, JUMP_KEYS};
pub use plugin::PlayerPlugin;
