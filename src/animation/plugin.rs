//! Animation plugin - the sprite animation controller.

use bevy::prelude::*;

use super::systems::*;
use crate::core::RunSet;

/// Animation plugin - per-state sprite clips for the player and enemies.
pub struct SpriteAnimationPlugin;

impl Plugin for SpriteAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (drive_player_animation, drive_enemy_animation),
                advance_animations,
                sync_sprites,
                blink_invulnerable,
            )
                .chain()
                .in_set(RunSet::Animate),
        );
    }
}
