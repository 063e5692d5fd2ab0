//! Enemy AI behavior systems.

use bevy::prelude::*;

use super::components::{AiState, Enemy, EnemyStats, Patrol};
use crate::core::EnemyAttackEvent;
use crate::player::Player;

/// Whether an enemy `ahead` units in front of the player should attack.
pub fn should_attack(ahead: f32, attack_range: f32) -> bool {
    (0.0..=attack_range).contains(&ahead)
}

/// Walk patrolling enemies back and forth.
pub fn ai_patrol(
    time: Res<Time>,
    mut enemy_query: Query<(&mut Transform, &mut Patrol, &AiState), With<Enemy>>,
) {
    for (mut transform, mut patrol, ai_state) in enemy_query.iter_mut() {
        if *ai_state != AiState::Patrol {
            continue;
        }
        transform.translation.x += patrol.step(time.delta_secs());
    }
}

/// Switch between patrolling and attacking based on where the player is.
pub fn ai_engage(
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(Entity, &Transform, &EnemyStats, &mut AiState), With<Enemy>>,
    mut attack_events: EventWriter<EnemyAttackEvent>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let player_x = player_transform.translation.x;

    for (entity, transform, stats, mut ai_state) in enemy_query.iter_mut() {
        let ahead = transform.translation.x - player_x;
        let attacking = should_attack(ahead, stats.attack_range);

        match (*ai_state, attacking) {
            (AiState::Patrol, true) => {
                *ai_state = AiState::Attack;
                attack_events.send(EnemyAttackEvent { enemy: entity });
            }
            (AiState::Attack, false) => {
                *ai_state = AiState::Patrol;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attacks_only_when_player_is_close_behind() {
        assert!(should_attack(0.0, 160.0));
        assert!(should_attack(160.0, 160.0));
        assert!(!should_attack(160.5, 160.0));
        assert!(!should_attack(-1.0, 160.0));
    }

    #[test]
    fn engage_fires_one_attack_per_approach() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<EnemyAttackEvent>()
            .add_systems(Update, ai_engage);

        app.world_mut()
            .spawn((Player, Transform::from_xyz(0.0, 0.0, 0.0)));
        let enemy = app
            .world_mut()
            .spawn((
                Enemy,
                AiState::Patrol,
                EnemyStats {
                    damage: 34.0,
                    attack_range: 160.0,
                },
                Transform::from_xyz(100.0, 0.0, 0.0),
            ))
            .id();

        let attacks = |app: &App| {
            app.world()
                .resource::<Events<EnemyAttackEvent>>()
                .iter_current_update_events()
                .count()
        };

        app.update();
        assert_eq!(*app.world().get::<AiState>(enemy).unwrap(), AiState::Attack);
        assert_eq!(attacks(&app), 1);

        app.update();
        assert_eq!(attacks(&app), 0);

        // Scrolled past the player
        app.world_mut()
            .get_mut::<Transform>(enemy)
            .unwrap()
            .translation
            .x = -50.0;
        app.update();
        assert_eq!(*app.world().get::<AiState>(enemy).unwrap(), AiState::Patrol);
    }
}
