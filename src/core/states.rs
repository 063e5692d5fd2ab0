//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example,
//! the jump input only runs while `Running`, while menu systems only run
//! in `Menu`.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// - Start in `Loading` to validate and load assets
/// - Move to `Menu` when loading completes
/// - `Settings` is a sub-screen of the menu
/// - `Running` is active gameplay
/// - `Paused` freezes gameplay but keeps the world visible
/// - `Dead` when the player's health reaches zero
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - validating sprites and loading handles
    #[default]
    Loading,
    /// Title screen
    Menu,
    /// Volume and difficulty screen
    Settings,
    /// Active gameplay
    Running,
    /// Game is paused (overlay on gameplay)
    Paused,
    /// Player has died, world frozen under the game over overlay
    Dead,
}

/// Active while a run exists, whether it is playing, paused or lost.
///
/// The run world is spawned on entering this state and torn down on leaving
/// it, so pausing and dying never rebuild the level.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct InRun;

impl ComputedStates for InRun {
    type SourceStates = GameState;

    fn compute(sources: GameState) -> Option<Self> {
        match sources {
            GameState::Running | GameState::Paused | GameState::Dead => Some(InRun),
            _ => None,
        }
    }
}
