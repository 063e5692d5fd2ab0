//! Core plugin that sets up game states, events, frame ordering and the
//! global keyboard shortcuts.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::states::*;

/// Ordered phases of one gameplay frame.
///
/// Everything except `Animate` only runs while `Running`, so pausing or
/// dying freezes the simulation in place. `Animate` also runs on the game
/// over screen and the main menu.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RunSet {
    /// Read player input
    Input,
    /// Gravity, scrolling, enemy patrol, spawning
    Simulate,
    /// Bounding box tests
    Collide,
    /// Damage, healing, death
    Resolve,
    /// Distance score and pace
    Score,
    /// Sprite frames
    Animate,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Menu, Running, etc.)
/// - Global events (CollisionEvent, DamageEvent, DeathEvent, etc.)
/// - The per-frame system set ordering
/// - Pause, restart and quit keys
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .insert_resource(GameConfig::load())

            // Initialize game states
            .init_state::<GameState>()
            .add_computed_state::<InRun>()

            // Register global events
            .add_event::<CollisionEvent>()
            .add_event::<DamageEvent>()
            .add_event::<HealEvent>()
            .add_event::<DeathEvent>()
            .add_event::<JumpEvent>()
            .add_event::<EnemyAttackEvent>()
            .add_event::<RestartEvent>()

            // Frame ordering
            .configure_sets(
                Update,
                (
                    RunSet::Input,
                    RunSet::Simulate,
                    RunSet::Collide,
                    RunSet::Resolve,
                    RunSet::Score,
                )
                    .chain()
                    .run_if(in_state(GameState::Running)),
            )
            .configure_sets(
                Update,
                RunSet::Animate
                    .after(RunSet::Score)
                    .run_if(
                        in_state(GameState::Running)
                            .or(in_state(GameState::Dead))
                            .or(in_state(GameState::Menu)),
                    ),
            )

            .add_systems(Startup, spawn_camera)

            // Pause/unpause with Escape or P
            .add_systems(
                Update,
                handle_pause_input.run_if(in_state(InRun)),
            )
            .add_systems(
                Update,
                handle_restart_input
                    .run_if(in_state(GameState::Running).or(in_state(GameState::Dead))),
            )
            .add_systems(Update, handle_quit_input);
    }
}

/// The single 2D camera, centered on the world origin.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Handle Escape/P to pause and unpause the run. Escape on the game over
/// screen returns to the menu.
fn handle_pause_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    current_state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.any_just_pressed([KeyCode::Escape, KeyCode::KeyP]) {
        match current_state.get() {
            GameState::Running => next_state.set(GameState::Paused),
            GameState::Paused => next_state.set(GameState::Running),
            GameState::Dead if keyboard.just_pressed(KeyCode::Escape) => {
                next_state.set(GameState::Menu)
            }
            _ => {}
        }
    }
}

/// R restarts the run, whether it is still going or already lost.
fn handle_restart_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut restart_events: EventWriter<RestartEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        restart_events.send(RestartEvent);
    }
}

/// Q quits from any state. Persistence saves on the resulting `AppExit`.
fn handle_quit_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::KeyQ) {
        info!("Quit requested");
        exit.send(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app(initial: GameState) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_state(initial)
            .add_computed_state::<InRun>()
            .add_systems(Update, handle_pause_input);
        app
    }

    // Without the input plugin nothing clears `just_pressed`, so a tap is a
    // press for one update followed by a manual release.
    fn tap(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();

        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release_all();
        keyboard.clear();
        app.update();
    }

    fn state(app: &App) -> GameState {
        *app.world().resource::<State<GameState>>().get()
    }

    #[test]
    fn escape_toggles_pause() {
        let mut app = test_app(GameState::Running);

        tap(&mut app, KeyCode::Escape);
        assert_eq!(state(&app), GameState::Paused);

        tap(&mut app, KeyCode::KeyP);
        assert_eq!(state(&app), GameState::Running);
    }

    #[test]
    fn escape_leaves_game_over_but_p_does_not() {
        let mut app = test_app(GameState::Dead);

        tap(&mut app, KeyCode::KeyP);
        assert_eq!(state(&app), GameState::Dead);

        tap(&mut app, KeyCode::Escape);
        assert_eq!(state(&app), GameState::Menu);
    }

    #[test]
    fn run_is_active_while_paused_or_dead() {
        assert_eq!(InRun::compute(GameState::Running), Some(InRun));
        assert_eq!(InRun::compute(GameState::Paused), Some(InRun));
        assert_eq!(InRun::compute(GameState::Dead), Some(InRun));
        assert_eq!(InRun::compute(GameState::Menu), None);
        assert_eq!(InRun::compute(GameState::Settings), None);
    }
}
