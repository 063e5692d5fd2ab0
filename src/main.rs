//! Dog-Human Runner - Entry Point
//!
//! Controls:
//! - Space / W / Up: Jump
//! - Escape / P: Pause/Unpause
//! - R: Restart
//! - Q: Quit
//! - Enter: Start from the menu

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Dog-Human Runner".to_string(),
                resolution: (960.0, 540.0).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(120, 180, 255)))

        // Audio
        .add_plugins(AudioPlugin)

        // Our game plugin
        .add_plugins(dog_runner::RunnerPlugin)

        .run();
}
