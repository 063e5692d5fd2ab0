//! Animation systems - pick each entity's clip, tick its timer and show the
//! current frame.

use bevy::prelude::*;

use super::components::{AnimState, AnimationClips, SpriteAnimation};
use crate::combat::{Dead, Invulnerability};
use crate::enemies::{AiState, Enemy};
use crate::player::{Player, PlayerBody};

/// Derive the player's clip from its physics state.
pub fn drive_player_animation(
    mut query: Query<(&PlayerBody, Option<&Dead>, &mut SpriteAnimation), With<Player>>,
) {
    for (body, dead, mut anim) in query.iter_mut() {
        let state = if dead.is_some() {
            AnimState::Dead
        } else if body.grounded {
            AnimState::Run
        } else {
            AnimState::Jump
        };
        anim.set_state(state);
    }
}

/// Derive each enemy's clip from its AI state.
pub fn drive_enemy_animation(mut query: Query<(&AiState, &mut SpriteAnimation), With<Enemy>>) {
    for (ai_state, mut anim) in query.iter_mut() {
        let state = match ai_state {
            AiState::Patrol => AnimState::Patrol,
            AiState::Attack => AnimState::Attack,
        };
        anim.set_state(state);
    }
}

/// Advance frame timers.
pub fn advance_animations(
    time: Res<Time>,
    mut query: Query<(&mut SpriteAnimation, &AnimationClips)>,
) {
    for (mut anim, clips) in query.iter_mut() {
        let count = clips.len(anim.state);
        anim.advance(time.delta_secs(), count);
    }
}

/// Show the current frame on the sprite.
pub fn sync_sprites(
    mut query: Query<(&SpriteAnimation, &AnimationClips, &mut Sprite), Changed<SpriteAnimation>>,
) {
    for (anim, clips, mut sprite) in query.iter_mut() {
        if let Some(image) = clips.frame(anim.state, anim.frame) {
            if sprite.image != *image {
                sprite.image = image.clone();
            }
        }
    }
}

/// Flicker the player while the post-hit window is active. A dead player
/// is always drawn solid.
pub fn blink_invulnerable(
    time: Res<Time>,
    mut query: Query<(&Invulnerability, Option<&Dead>, &mut Sprite), With<Player>>,
) {
    for (invulnerable, dead, mut sprite) in query.iter_mut() {
        let blinking = dead.is_none()
            && invulnerable.is_active()
            && (time.elapsed_secs() * 12.0) as u32 % 2 == 0;
        let alpha = if blinking { 0.35 } else { 1.0 };
        sprite.color = Color::srgba(1.0, 1.0, 1.0, alpha);
    }
}
