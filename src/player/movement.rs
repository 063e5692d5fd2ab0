//! Jumping, gravity and player spawning.

use bevy::prelude::*;

use super::components::*;
use crate::animation::{AnimState, AnimationClips, SpriteAnimation};
use crate::combat::{Dead, Health, Invulnerability};
use crate::core::{GameConfig, JumpEvent, RunSet};
use crate::physics::Hitbox;
use crate::world::RunEntity;

/// Keys that make the player jump.
pub const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowUp];

/// Set up player movement systems.
pub fn setup_movement_systems(app: &mut App) {
    app.add_systems(Update, jump_input.in_set(RunSet::Input))
        .add_systems(Update, apply_gravity.in_set(RunSet::Simulate));
}

/// Start a jump when a jump key is pressed and the player is on the ground.
pub fn jump_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut player_query: Query<&mut PlayerBody, (With<Player>, Without<Dead>)>,
    mut jump_events: EventWriter<JumpEvent>,
) {
    if !keyboard.any_just_pressed(JUMP_KEYS) {
        return;
    }
    let Ok(mut body) = player_query.get_single_mut() else {
        return;
    };

    if body.try_jump(config.jump_impulse) {
        jump_events.send(JumpEvent);
    }
}

/// Integrate vertical velocity and land on the ground.
pub fn apply_gravity(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut player_query: Query<(&mut Transform, &mut PlayerBody, &Hitbox), With<Player>>,
) {
    let floor = config.ground_y();
    for (mut transform, mut body, hitbox) in player_query.iter_mut() {
        body.integrate(
            &mut transform.translation.y,
            floor + hitbox.half_size.y,
            config.gravity,
            time.delta_secs(),
        );
    }
}

/// Spawn the player standing on the ground at its fixed screen position.
pub fn spawn_player(commands: &mut Commands, config: &GameConfig, clips: &AnimationClips) -> Entity {
    let (width, height) = config.player_size;
    let position = Vec3::new(config.player_x(), config.ground_y() + height / 2.0, 10.0);

    let player = commands
        .spawn((
            Player,
            PlayerBody::default(),
            Health::new(config.max_health),
            Invulnerability::default(),
            Hitbox::from_size(width, height),
            SpriteAnimation::new(AnimState::Run, config.player_frame_secs),
            clips.clone(),
            Sprite {
                image: clips.first_frame(AnimState::Run),
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_translation(position),
            RunEntity,
        ))
        .id();

    info!("Spawned player at {:?}", position);
    player
}
