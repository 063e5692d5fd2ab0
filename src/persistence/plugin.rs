//! Persistence plugin - loads settings and the high score at startup and
//! writes them back when they change.

use bevy::prelude::*;

use super::save::{commit_high_score, PersistencePaths, SaveData};
use super::settings::Settings;
use crate::core::{DeathEvent, RunSet};
use crate::score::{HighScore, Score};

/// Persistence plugin - settings.ron and save.ron.
pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PersistencePaths>()
            .add_systems(PreStartup, load_persisted)
            .add_systems(
                Update,
                save_on_death.after(RunSet::Resolve).after(RunSet::Score),
            )
            .add_systems(
                Update,
                save_settings.run_if(
                    resource_exists::<Settings>
                        .and(resource_changed::<Settings>)
                        .and(not(resource_added::<Settings>)),
                ),
            )
            .add_systems(Last, save_on_exit);
    }
}

/// Read settings and the high score before anything else starts.
pub fn load_persisted(mut commands: Commands, paths: Res<PersistencePaths>) {
    commands.insert_resource(Settings::load(&paths.settings));
    commands.insert_resource(HighScore {
        best: SaveData::load(&paths.save).high_score,
    });
}

/// Record the high score as soon as the player dies, once the death
/// frame's distance has been scored.
fn save_on_death(
    mut death_events: EventReader<DeathEvent>,
    paths: Res<PersistencePaths>,
    score: Res<Score>,
    mut high_score: ResMut<HighScore>,
) {
    if death_events.read().count() > 0 {
        commit_high_score(&mut high_score, score.points, &paths.save);
    }
}

/// Write settings whenever they are edited.
fn save_settings(settings: Res<Settings>, paths: Res<PersistencePaths>) {
    match settings.save_to(&paths.settings) {
        Ok(()) => info!("Saved settings to {}", paths.settings.display()),
        Err(e) => error!("Failed to save settings: {}", e),
    }
}

/// Flush everything on the way out.
fn save_on_exit(
    mut exit_events: EventReader<AppExit>,
    paths: Res<PersistencePaths>,
    score: Res<Score>,
    settings: Option<Res<Settings>>,
    mut high_score: ResMut<HighScore>,
) {
    if exit_events.read().count() == 0 {
        return;
    }

    commit_high_score(&mut high_score, score.points, &paths.save);
    if let Some(settings) = settings {
        if let Err(e) = settings.save_to(&paths.settings) {
            error!("Failed to save settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::Difficulty;

    fn test_app(dir: &tempfile::TempDir) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<DeathEvent>()
            .init_resource::<Score>()
            .insert_resource(PersistencePaths {
                settings: dir.path().join("settings.ron"),
                save: dir.path().join("save.ron"),
            })
            .add_plugins(PersistencePlugin);
        app
    }

    #[test]
    fn startup_loads_saved_high_score_and_settings() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("save.ron"), "(high_score: 42)").unwrap();
        std::fs::write(
            dir.path().join("settings.ron"),
            "(volume: 0.2, difficulty: Easy)",
        )
        .unwrap();

        let mut app = test_app(&dir);
        app.update();

        assert_eq!(app.world().resource::<HighScore>().best, 42);
        let settings = app.world().resource::<Settings>();
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert!((settings.volume - 0.2).abs() < 1e-6);
    }

    #[test]
    fn death_writes_a_better_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.update();

        app.world_mut().resource_mut::<Score>().points = 17;
        app.world_mut().send_event(DeathEvent {
            entity: Entity::PLACEHOLDER,
        });
        app.update();

        assert_eq!(app.world().resource::<HighScore>().best, 17);
        assert_eq!(SaveData::load(&dir.path().join("save.ron")).high_score, 17);
    }

    #[test]
    fn death_frame_distance_counts_toward_the_saved_best() {
        use crate::combat::{CombatPlugin, Health, Invulnerability};
        use crate::core::{CorePlugin, DamageEvent, GameConfig, GameState};
        use crate::player::Player;
        use crate::score::{RunPace, ScorePlugin};
        use bevy::state::app::StatesPlugin;
        use bevy::time::TimeUpdateStrategy;
        use std::time::Duration;

        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(PersistencePaths {
                settings: dir.path().join("settings.ron"),
                save: dir.path().join("save.ron"),
            })
            .add_plugins((CorePlugin, ScorePlugin, CombatPlugin, PersistencePlugin))
            .insert_resource(GameConfig {
                distance_per_point: 1.0,
                ..default()
            })
            .insert_resource(RunPace::new(400.0))
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Running);
        app.update();
        app.update();

        let player = app
            .world_mut()
            .spawn((Player, Health::new(100.0), Invulnerability::default()))
            .id();
        let before = app.world().resource::<Score>().points;
        app.world_mut().send_event(DamageEvent {
            target: player,
            source: player,
            amount: 1000.0,
        });
        app.update();

        let points = app.world().resource::<Score>().points;
        assert!(points > before);
        assert_eq!(app.world().resource::<HighScore>().best, points);
        assert_eq!(SaveData::load(&dir.path().join("save.ron")).high_score, points);
    }

    #[test]
    fn changed_settings_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.update();
        assert!(!dir.path().join("settings.ron").exists());

        app.world_mut().resource_mut::<Settings>().difficulty = Difficulty::Hard;
        app.update();

        let saved = Settings::load(&dir.path().join("settings.ron"));
        assert_eq!(saved.difficulty, Difficulty::Hard);
    }

    #[test]
    fn exit_flushes_the_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        app.update();

        app.world_mut().resource_mut::<Score>().points = 9;
        app.world_mut().send_event(AppExit::Success);
        app.update();

        assert_eq!(SaveData::load(&dir.path().join("save.ron")).high_score, 9);
    }
}
