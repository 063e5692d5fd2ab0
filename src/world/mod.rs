//! World module - the scrolling run: spawning, parallax and run lifecycle.

mod background;
mod components;
mod plugin;
mod scrolling;
mod spawning;

pub use background::{layer_offset, ParallaxLayer};
pub use components::{Passed, RunEntity, Scrolls, SpawnKind};
pub use plugin::{RunContext, WorldPlugin};
pub use spawning::{choose_kind, spawn_weights, SpawnRng, Spawner};
