//! Combat plugin - damage, healing, and death.

use bevy::prelude::*;

use super::systems;

/// Combat plugin - turns collisions into health changes.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        systems::setup_combat_systems(app);
    }
}
