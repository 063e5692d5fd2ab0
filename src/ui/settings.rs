//! Settings screen - volume and difficulty.
//!
//! Changes apply immediately; the persistence plugin writes them to disk
//! whenever the `Settings` resource changes.

use bevy::prelude::*;

use super::plugin::{despawn_screen, label, screen_root, spawn_menu_button, MenuButton};
use crate::core::GameState;
use crate::persistence::{Difficulty, Settings};

/// Marker for settings screen entities.
#[derive(Component)]
struct SettingsUi;

/// Text showing the current volume.
#[derive(Component)]
struct VolumeLabel;

pub fn setup_settings_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Settings), setup_settings_screen)
        .add_systems(
            Update,
            (
                settings_keys,
                update_volume_label.run_if(resource_changed::<Settings>),
            )
                .run_if(in_state(GameState::Settings)),
        )
        .add_systems(OnExit(GameState::Settings), despawn_screen::<SettingsUi>);
}

fn volume_text(volume: f32) -> String {
    format!("Volume: {}%", (volume * 100.0).round() as i32)
}

fn setup_settings_screen(mut commands: Commands, settings: Res<Settings>) {
    commands
        .spawn((screen_root(Color::srgba(0.05, 0.05, 0.08, 0.9)), SettingsUi))
        .with_children(|parent| {
            parent.spawn(label("SETTINGS", 48.0, Color::srgb(0.9, 0.9, 0.92), 30.0));

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                })
                .with_children(|row| {
                    spawn_menu_button(row, "-", 60.0, MenuButton::VolumeDown);
                    row.spawn((
                        Text::new(volume_text(settings.volume)),
                        TextFont {
                            font_size: 26.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.9, 0.92)),
                        Node {
                            width: Val::Px(200.0),
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                        VolumeLabel,
                    ));
                    spawn_menu_button(row, "+", 60.0, MenuButton::VolumeUp);
                });

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Row,
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                })
                .with_children(|row| {
                    for difficulty in Difficulty::ALL {
                        spawn_menu_button(
                            row,
                            difficulty.label(),
                            140.0,
                            MenuButton::Difficulty(difficulty),
                        );
                    }
                });

            spawn_menu_button(parent, "Back", 220.0, MenuButton::Back);
            parent.spawn(label(
                "Esc to save and go back",
                16.0,
                Color::srgb(0.7, 0.7, 0.75),
                0.0,
            ));
        });
}

/// Escape leaves the settings screen.
fn settings_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        next_state.set(GameState::Menu);
    }
}

fn update_volume_label(settings: Res<Settings>, mut query: Query<&mut Text, With<VolumeLabel>>) {
    for mut text in query.iter_mut() {
        text.0 = volume_text(settings.volume);
    }
}
