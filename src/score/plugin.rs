//! Score plugin.

use bevy::prelude::*;

use super::resources::{HighScore, RunPace, Score};
use super::systems::{accumulate_distance, update_pace};
use crate::core::RunSet;

/// Score plugin - distance score and the speed curve.
pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .init_resource::<HighScore>()
            .init_resource::<RunPace>()
            .add_systems(
                Update,
                (accumulate_distance, update_pace)
                    .chain()
                    .in_set(RunSet::Score),
            );
    }
}
