//! World plugin - run lifecycle, spawning, scrolling and the background.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::background::{spawn_background, update_parallax};
use super::components::RunEntity;
use super::scrolling::{award_passes, despawn_offscreen, scroll_world};
use super::spawning::{run_spawner, sample_range, seed_world, SpawnRng, Spawner};
use crate::assets::SpriteLibrary;
use crate::core::{GameConfig, GameState, InRun, RestartEvent, RunSet};
use crate::persistence::{commit_high_score, PersistencePaths, Settings};
use crate::player::spawn_player;
use crate::score::{HighScore, RunPace, Score};

/// World plugin - builds and tears down runs.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Spawner>()
            .init_resource::<SpawnRng>()
            .add_systems(OnEnter(InRun), begin_run)
            .add_systems(OnExit(InRun), end_run)
            .add_systems(Update, restart_run.run_if(in_state(InRun)))
            .add_systems(
                Update,
                (
                    scroll_world,
                    run_spawner,
                    award_passes,
                    despawn_offscreen,
                    update_parallax,
                )
                    .chain()
                    .in_set(RunSet::Simulate),
            );
    }
}

/// Everything needed to start, reset and end a run.
#[derive(SystemParam)]
pub struct RunContext<'w, 's> {
    commands: Commands<'w, 's>,
    config: Res<'w, GameConfig>,
    library: Res<'w, SpriteLibrary>,
    settings: Res<'w, Settings>,
    paths: Res<'w, PersistencePaths>,
    rng: ResMut<'w, SpawnRng>,
    score: ResMut<'w, Score>,
    high_score: ResMut<'w, HighScore>,
    pace: ResMut<'w, RunPace>,
    spawner: ResMut<'w, Spawner>,
    run_entities: Query<'w, 's, Entity, With<RunEntity>>,
}

impl RunContext<'_, '_> {
    /// Reset score, pace and spawner, then build a fresh world and player.
    pub fn start(&mut self) {
        *self.score = Score::default();
        *self.pace = RunPace::new(self.config.base_speed * self.settings.difficulty.speed_modifier());

        spawn_background(&mut self.commands, &self.config, &self.library);
        spawn_player(&mut self.commands, &self.config, &self.library.player);

        let rng = &mut self.rng.0;
        let furthest = seed_world(&mut self.commands, &self.config, &self.library, rng);
        let gap = sample_range(rng, (self.config.min_spawn_gap, self.config.max_spawn_gap));
        self.spawner.countdown = (furthest - self.config.spawn_x()).max(0.0) + gap;

        info!(
            "Run started on {} at speed {:.0}",
            self.settings.difficulty.label(),
            self.pace.speed
        );
    }

    /// Keep the current score if it is a new best.
    pub fn commit_high_score(&mut self) {
        commit_high_score(&mut self.high_score, self.score.points, &self.paths.save);
    }

    /// Despawn every entity belonging to the run.
    pub fn clear(&mut self) {
        for entity in self.run_entities.iter() {
            self.commands.entity(entity).despawn_recursive();
        }
    }
}

fn begin_run(mut run: RunContext) {
    run.start();
}

/// Rebuild the run in place, from Running or from the game over screen.
fn restart_run(
    mut restart_events: EventReader<RestartEvent>,
    mut run: RunContext,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if restart_events.read().count() == 0 {
        return;
    }

    info!("Restarting run at {} points", run.score.points);
    run.commit_high_score();
    run.clear();
    run.start();
    next_state.set(GameState::Running);
}

fn end_run(mut run: RunContext) {
    run.commit_high_score();
    run.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::Health;
    use crate::core::CorePlugin;
    use crate::persistence::SaveData;
    use crate::player::Player;
    use bevy::state::app::StatesPlugin;

    fn test_app(dir: &tempfile::TempDir) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .add_plugins(CorePlugin)
            .insert_resource(GameConfig::default())
            .init_resource::<SpriteLibrary>()
            .init_resource::<Settings>()
            .insert_resource(PersistencePaths {
                settings: dir.path().join("settings.ron"),
                save: dir.path().join("save.ron"),
            })
            .init_resource::<Score>()
            .init_resource::<HighScore>()
            .init_resource::<RunPace>()
            .add_plugins(WorldPlugin);
        app
    }

    fn set_state(app: &mut App, state: GameState) {
        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(state);
        app.update();
    }

    fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, F>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn entering_a_run_builds_the_world() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        set_state(&mut app, GameState::Running);

        assert_eq!(count::<With<Player>>(&mut app), 1);
        let config = GameConfig::default();
        let scrolling = count::<With<crate::world::Scrolls>>(&mut app);
        assert!(scrolling >= config.seed_count);
        assert!(app.world().resource::<Spawner>().countdown > 0.0);
    }

    #[test]
    fn restart_resets_score_and_player_but_keeps_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        set_state(&mut app, GameState::Running);

        app.world_mut().resource_mut::<Score>().points = 30;
        let mut players = app.world_mut().query_filtered::<&mut Health, With<Player>>();
        players.single_mut(app.world_mut()).take_damage(60.0);
        set_state(&mut app, GameState::Dead);

        app.world_mut().send_event(RestartEvent);
        app.update();
        app.update();

        assert_eq!(app.world().resource::<Score>().points, 0);
        assert_eq!(app.world().resource::<HighScore>().best, 30);
        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::Running
        );
        assert_eq!(count::<With<Player>>(&mut app), 1);
        let mut players = app.world_mut().query_filtered::<&Health, With<Player>>();
        let health = players.single(app.world());
        assert_eq!(health.current, health.maximum);
        assert_eq!(SaveData::load(&dir.path().join("save.ron")).high_score, 30);
    }

    #[test]
    fn leaving_the_run_clears_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(&dir);
        set_state(&mut app, GameState::Running);
        set_state(&mut app, GameState::Paused);
        assert_eq!(count::<With<Player>>(&mut app), 1);

        set_state(&mut app, GameState::Menu);
        assert_eq!(count::<With<RunEntity>>(&mut app), 0);
    }
}
