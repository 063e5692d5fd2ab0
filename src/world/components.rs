//! Components shared by everything that lives in a run.

use bevy::prelude::*;

/// Marker for entities owned by the current run; all of them are despawned
/// on restart and when leaving the run.
#[derive(Component)]
pub struct RunEntity;

/// Marker for entities that move left with the world.
#[derive(Component)]
pub struct Scrolls;

/// Marker for a hazard the player has already passed and been scored for.
#[derive(Component)]
pub struct Passed;

/// What the spawner can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpawnKind {
    Obstacle,
    Enemy,
    Potion,
}

impl SpawnKind {
    pub const ALL: [SpawnKind; 3] = [SpawnKind::Obstacle, SpawnKind::Enemy, SpawnKind::Potion];
}
