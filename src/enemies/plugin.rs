//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use crate::core::RunSet;

/// Enemy plugin - handles patrol and attack behavior.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (ai::ai_patrol, ai::ai_engage)
                .chain()
                .in_set(RunSet::Simulate),
        );
    }
}
