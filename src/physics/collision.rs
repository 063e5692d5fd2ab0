//! Player-versus-world contact detection.

use bevy::prelude::*;

use super::aabb::Hitbox;
use crate::combat::Dead;
use crate::core::{CollisionEvent, ContactKind};
use crate::player::Player;

/// Test the player's box against every active obstacle, enemy and potion.
///
/// Emits at most one `CollisionEvent` per entity per frame; what the contact
/// does is decided by the combat systems.
pub fn detect_collisions(
    player_query: Query<(&Transform, &Hitbox), (With<Player>, Without<Dead>)>,
    contact_query: Query<(Entity, &Transform, &Hitbox, &ContactKind), Without<Player>>,
    mut collisions: EventWriter<CollisionEvent>,
) {
    let Ok((player_transform, player_hitbox)) = player_query.get_single() else {
        return;
    };
    let player_box = player_hitbox.at(player_transform.translation.truncate());

    for (entity, transform, hitbox, kind) in contact_query.iter() {
        if player_box.overlaps(&hitbox.at(transform.translation.truncate())) {
            collisions.send(CollisionEvent {
                entity,
                kind: *kind,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<CollisionEvent>()
            .add_systems(Update, detect_collisions);
        app
    }

    fn spawn_box(app: &mut App, x: f32, kind: ContactKind) -> Entity {
        app.world_mut()
            .spawn((
                kind,
                Hitbox::from_size(10.0, 10.0),
                Transform::from_xyz(x, 0.0, 0.0),
            ))
            .id()
    }

    fn collided(app: &App) -> Vec<Entity> {
        app.world()
            .resource::<Events<CollisionEvent>>()
            .iter_current_update_events()
            .map(|e| e.entity)
            .collect()
    }

    #[test]
    fn reports_each_overlapping_entity_once() {
        let mut app = test_app();
        app.world_mut().spawn((
            Player,
            Hitbox::from_size(10.0, 10.0),
            Transform::from_xyz(0.0, 0.0, 0.0),
        ));
        let touching = spawn_box(&mut app, 10.0, ContactKind::Obstacle);
        let overlapping = spawn_box(&mut app, 9.0, ContactKind::Enemy);
        let potion = spawn_box(&mut app, -4.0, ContactKind::Potion);
        let far = spawn_box(&mut app, 300.0, ContactKind::Obstacle);

        app.update();

        let hits = collided(&app);
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&overlapping));
        assert!(hits.contains(&potion));
        assert!(!hits.contains(&touching));
        assert!(!hits.contains(&far));
    }

    #[test]
    fn dead_player_collides_with_nothing() {
        let mut app = test_app();
        app.world_mut().spawn((
            Player,
            Dead,
            Hitbox::from_size(10.0, 10.0),
            Transform::default(),
        ));
        spawn_box(&mut app, 0.0, ContactKind::Enemy);

        app.update();
        assert!(collided(&app).is_empty());
    }
}
