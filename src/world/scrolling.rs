//! Moving the world past the player.

use bevy::prelude::*;

use super::components::{Passed, Scrolls};
use crate::core::{ContactKind, GameConfig};
use crate::physics::Hitbox;
use crate::player::Player;
use crate::score::{RunPace, Score};

/// Whether a box centered at `x` is fully past the left screen edge.
pub fn is_offscreen_left(x: f32, half_width: f32, left_edge: f32) -> bool {
    x + half_width <= left_edge
}

/// Move every scrolling entity left at the current run speed.
pub fn scroll_world(
    time: Res<Time>,
    pace: Res<RunPace>,
    mut query: Query<&mut Transform, With<Scrolls>>,
) {
    let dx = pace.speed * time.delta_secs();
    for mut transform in query.iter_mut() {
        transform.translation.x -= dx;
    }
}

/// Award the pass bonus for each hazard that has fully cleared the player.
pub fn award_passes(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut score: ResMut<Score>,
    player_query: Query<(&Transform, &Hitbox), With<Player>>,
    hazard_query: Query<
        (Entity, &Transform, &Hitbox, &ContactKind),
        (With<Scrolls>, Without<Passed>, Without<Player>),
    >,
) {
    let Ok((player_transform, player_hitbox)) = player_query.get_single() else {
        return;
    };
    let player_left = player_transform.translation.x - player_hitbox.half_size.x;

    for (entity, transform, hitbox, kind) in hazard_query.iter() {
        if *kind == ContactKind::Potion {
            continue;
        }
        if transform.translation.x + hitbox.half_size.x < player_left {
            commands.entity(entity).insert(Passed);
            score.award_pass(config.pass_bonus);
        }
    }
}

/// Remove entities once they are fully off-screen to the left.
pub fn despawn_offscreen(
    mut commands: Commands,
    config: Res<GameConfig>,
    query: Query<(Entity, &Transform, &Hitbox), With<Scrolls>>,
) {
    for (entity, transform, hitbox) in query.iter() {
        if is_offscreen_left(transform.translation.x, hitbox.half_size.x, config.left_edge()) {
            commands.entity(entity).despawn_recursive();
        }
    }
}
