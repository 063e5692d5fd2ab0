//! Combat systems - collision outcomes, damage, healing and death.

use bevy::prelude::*;
use std::collections::HashSet;

use super::components::*;
use crate::core::{
    CollisionEvent, ContactKind, DamageEvent, DeathEvent, GameConfig, GameState, HealEvent, RunSet,
};
use crate::animation::{AnimState, AnimationClips};
use crate::enemies::EnemyStats;
use crate::physics::Hitbox;
use crate::player::Player;
use crate::world::{RunEntity, Scrolls};

/// Seconds a defeated enemy stays visible.
const REMAINS_SECS: f32 = 0.5;

/// Configure combat systems.
pub fn setup_combat_systems(app: &mut App) {
    app.add_systems(
        Update,
        (tick_invulnerability, fade_remains).in_set(RunSet::Simulate),
    )
        .add_systems(
            Update,
            (
                resolve_collisions,
                apply_damage,
                apply_healing,
                check_deaths,
            )
                .chain()
                .in_set(RunSet::Resolve),
        );
}

/// Count down the post-hit invulnerability window.
pub fn tick_invulnerability(time: Res<Time>, mut query: Query<&mut Invulnerability>) {
    for mut invulnerable in query.iter_mut() {
        invulnerable.tick(time.delta_secs());
    }
}

/// Turn contacts into effects.
///
/// Enemies hit once and are consumed. Obstacles stay in the world and only
/// hurt while the player is not invulnerable. Potions heal and are consumed.
pub fn resolve_collisions(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    player_query: Query<(Entity, Option<&Invulnerability>), (With<Player>, Without<Dead>)>,
    enemy_query: Query<(
        &EnemyStats,
        Option<&Transform>,
        Option<&Hitbox>,
        Option<&AnimationClips>,
    )>,
    obstacle_query: Query<&Obstacle>,
    potion_query: Query<&Potion>,
    mut damage_events: EventWriter<DamageEvent>,
    mut heal_events: EventWriter<HealEvent>,
) {
    let Ok((player, invulnerable)) = player_query.get_single() else {
        collisions.clear();
        return;
    };
    let invulnerable = invulnerable.is_some_and(|i| i.is_active());

    for event in collisions.read() {
        match event.kind {
            ContactKind::Enemy => {
                let Ok((stats, transform, hitbox, clips)) = enemy_query.get(event.entity) else {
                    continue;
                };
                damage_events.send(DamageEvent {
                    target: player,
                    source: event.entity,
                    amount: stats.damage,
                });
                commands.entity(event.entity).despawn_recursive();

                if let (Some(transform), Some(clips)) = (transform, clips) {
                    commands.spawn((
                        Remains::new(REMAINS_SECS),
                        Sprite {
                            image: clips.first_frame(AnimState::Dead),
                            custom_size: hitbox.map(|h| h.half_size * 2.0),
                            ..default()
                        },
                        *transform,
                        Scrolls,
                        RunEntity,
                    ));
                }
            }
            ContactKind::Obstacle => {
                if invulnerable {
                    continue;
                }
                let Ok(obstacle) = obstacle_query.get(event.entity) else {
                    continue;
                };
                damage_events.send(DamageEvent {
                    target: player,
                    source: event.entity,
                    amount: obstacle.damage,
                });
            }
            ContactKind::Potion => {
                let Ok(potion) = potion_query.get(event.entity) else {
                    continue;
                };
                heal_events.send(HealEvent {
                    target: player,
                    amount: potion.heal,
                });
                commands.entity(event.entity).despawn_recursive();
            }
        }
    }
}

/// Apply damage to entities.
pub fn apply_damage(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut damage_events: EventReader<DamageEvent>,
    mut health_query: Query<(&mut Health, Option<&mut Invulnerability>), Without<Dead>>,
    mut death_events: EventWriter<DeathEvent>,
) {
    // Track entities that died this frame to avoid duplicate death events
    let mut died_this_frame = HashSet::new();

    for event in damage_events.read() {
        if died_this_frame.contains(&event.target) {
            continue;
        }

        let Ok((mut health, invulnerable)) = health_query.get_mut(event.target) else {
            continue;
        };

        health.take_damage(event.amount);
        if let Some(mut invulnerable) = invulnerable {
            invulnerable.start(config.invulnerability_secs);
        }

        if health.is_dead() {
            died_this_frame.insert(event.target);
            commands.entity(event.target).insert(Dead);
            death_events.send(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Apply potion healing.
pub fn apply_healing(
    mut heal_events: EventReader<HealEvent>,
    mut health_query: Query<&mut Health, Without<Dead>>,
) {
    for event in heal_events.read() {
        if let Ok(mut health) = health_query.get_mut(event.target) {
            let healed = health.heal(event.amount);
            debug!("Healed {} ({}/{})", healed, health.current, health.maximum);
        }
    }
}

/// Fade defeated enemies out and remove them.
pub fn fade_remains(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Remains, &mut Sprite)>,
) {
    for (entity, mut remains, mut sprite) in query.iter_mut() {
        let alpha = remains.tick(time.delta_secs());
        if alpha <= 0.0 {
            commands.entity(entity).despawn_recursive();
        } else {
            sprite.color = Color::srgba(1.0, 1.0, 1.0, alpha);
        }
    }
}

/// End the run when the player dies.
pub fn check_deaths(
    mut death_events: EventReader<DeathEvent>,
    player_query: Query<Entity, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in death_events.read() {
        if player_query.get(event.entity).is_ok() {
            info!("Player died! Transitioning to Dead...");
            next_state.set(GameState::Dead);
        }
    }
}
