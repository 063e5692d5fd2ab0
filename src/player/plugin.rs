//! Player plugin - jumping and gravity.

use bevy::prelude::*;

use super::movement;

/// Player plugin - handles jump input and vertical movement.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        movement::setup_movement_systems(app);
    }
}
