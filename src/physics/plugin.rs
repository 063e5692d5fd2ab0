//! Physics plugin - collision detection.

use bevy::prelude::*;

use super::collision::detect_collisions;
use crate::core::RunSet;

/// Physics plugin - bounding box tests between the player and the world.
///
/// Player gravity lives with the player movement systems.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, detect_collisions.in_set(RunSet::Collide));
    }
}
