//! Dog-Human Runner - a 2D side-scrolling runner in Bevy.
//!
//! The player auto-runs to the right, jumps over boxes and patrolling
//! enemies, drinks potions to heal, and scores by distance until a hazard
//! ends the run.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, frame ordering, gameplay config
//! - **Persistence**: Settings and high score files
//! - **Assets**: Sprite validation and the sprite library
//! - **Audio**: Sound effects and music
//! - **Player**: Jumping and gravity
//! - **Combat**: Health, damage, healing, death
//! - **Enemies**: Patrol and attack AI
//! - **Physics**: Bounding box collision
//! - **Animation**: Per-state sprite clips
//! - **World**: Run lifecycle, spawning, scrolling, parallax
//! - **Score**: Distance score and run pace
//! - **UI**: Menus, settings screen, HUD

pub mod animation;
pub mod assets;
pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod persistence;
pub mod physics;
pub mod player;
pub mod score;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Expects `DefaultPlugins` and `bevy_kira_audio::AudioPlugin` to be added
/// by the caller.
pub struct RunnerPlugin;

impl Plugin for RunnerPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Files and assets
            .add_plugins(persistence::PersistencePlugin)
            .add_plugins(assets::AssetsPlugin)
            .add_plugins(audio::GameAudioPlugin)

            // Gameplay
            .add_plugins(player::PlayerPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(physics::PhysicsPlugin)
            .add_plugins(animation::SpriteAnimationPlugin)
            .add_plugins(world::WorldPlugin)
            .add_plugins(score::ScorePlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
