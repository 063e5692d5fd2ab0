//! UI plugin - main menu, pause overlay and game over screen.

use bevy::prelude::*;

use super::{hud, settings};
use crate::animation::{AnimState, AnimationClips, SpriteAnimation};
use crate::assets::SpriteLibrary;
use crate::core::{GameConfig, GameState, RestartEvent};
use crate::persistence::{Difficulty, Settings, VOLUME_STEP};
use crate::score::{HighScore, Score};

const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_HOVERED: Color = Color::srgb(0.25, 0.25, 0.3);
const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);
const BUTTON_SELECTED: Color = Color::srgb(0.2, 0.45, 0.3);
const TEXT_COLOR: Color = Color::srgb(0.9, 0.9, 0.92);
const HINT_COLOR: Color = Color::srgb(0.7, 0.7, 0.75);

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
        settings::setup_settings_systems(app);

        app
            // Buttons on every screen
            .add_systems(Update, (button_actions, button_colors).chain())

            // Main menu
            .add_systems(OnEnter(GameState::Menu), (setup_main_menu, spawn_menu_mascots))
            .add_systems(Update, main_menu_keys.run_if(in_state(GameState::Menu)))
            .add_systems(OnExit(GameState::Menu), despawn_screen::<MainMenuUi>)

            // Pause menu
            .add_systems(OnEnter(GameState::Paused), setup_pause_menu)
            .add_systems(OnExit(GameState::Paused), despawn_screen::<PauseMenuUi>)

            // Game over
            .add_systems(OnEnter(GameState::Dead), setup_game_over)
            .add_systems(OnExit(GameState::Dead), despawn_screen::<GameOverUi>);
    }
}

/// Marker for main menu UI entities.
#[derive(Component)]
struct MainMenuUi;

/// Marker for pause menu UI entities.
#[derive(Component)]
struct PauseMenuUi;

/// Marker for game over UI entities.
#[derive(Component)]
struct GameOverUi;

/// What a button does when pressed.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum MenuButton {
    Start,
    Settings,
    Quit,
    Resume,
    MainMenu,
    Retry,
    VolumeDown,
    VolumeUp,
    Difficulty(Difficulty),
    Back,
}

/// Full-screen centered column used as the root of every screen.
pub(super) fn screen_root(background: Color) -> (Node, BackgroundColor) {
    (
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(background),
    )
}

/// A line of text with a bottom margin.
pub(super) fn label(text: impl Into<String>, size: f32, color: Color, margin: f32) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
        Node {
            margin: UiRect::bottom(Val::Px(margin)),
            ..default()
        },
    )
}

/// Helper to spawn a menu button.
pub(super) fn spawn_menu_button(
    parent: &mut ChildBuilder,
    text: &str,
    width: f32,
    button: MenuButton,
) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(width),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            button,
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(text),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
            ));
        });
}

/// Set up the main menu.
fn setup_main_menu(
    mut commands: Commands,
    library: Option<Res<SpriteLibrary>>,
    high_score: Res<HighScore>,
) {
    let logo = library.and_then(|library| library.logo.clone());

    commands
        .spawn((screen_root(Color::srgba(0.05, 0.05, 0.08, 0.55)), MainMenuUi))
        .with_children(|parent| {
            match logo {
                Some(logo) => {
                    parent.spawn((
                        ImageNode::new(logo),
                        Node {
                            width: Val::Px(480.0),
                            height: Val::Px(160.0),
                            margin: UiRect::bottom(Val::Px(30.0)),
                            ..default()
                        },
                    ));
                }
                None => {
                    parent.spawn(label("DOG-HUMAN RUNNER", 64.0, Color::srgb(1.0, 0.85, 0.4), 40.0));
                }
            }

            spawn_menu_button(parent, "Start", 220.0, MenuButton::Start);
            spawn_menu_button(parent, "Settings", 220.0, MenuButton::Settings);
            spawn_menu_button(parent, "Quit", 220.0, MenuButton::Quit);

            parent.spawn(label(
                format!("High Score: {}", high_score.best),
                24.0,
                TEXT_COLOR,
                10.0,
            ));
            parent.spawn(label(
                "Space / W / Up to jump, Esc / P to pause, R to restart, Q to quit",
                16.0,
                HINT_COLOR,
                0.0,
            ));
        });
}

/// The dog and the human idling on the ground behind the main menu.
fn spawn_menu_mascots(
    mut commands: Commands,
    library: Option<Res<SpriteLibrary>>,
    config: Res<GameConfig>,
) {
    let Some(library) = library else {
        return;
    };

    let mascots = [
        (&library.player, config.player_size, config.player_x(), config.player_frame_secs),
        (
            &library.enemy,
            config.enemy_size,
            config.right_edge() - config.player_x().abs(),
            config.enemy_frame_secs,
        ),
    ];
    for (clips, (width, height), x, frame_secs) in mascots {
        commands.spawn((
            SpriteAnimation::new(AnimState::Idle, frame_secs),
            clips.clone(),
            Sprite {
                image: clips.first_frame(AnimState::Idle),
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(x, config.ground_y() + height / 2.0, 5.0),
            MainMenuUi,
        ));
    }
}

/// Enter or Space starts a run from the menu.
fn main_menu_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        next_state.set(GameState::Running);
    }
}

/// Set up the pause menu.
fn setup_pause_menu(mut commands: Commands) {
    // Semi-transparent overlay
    commands
        .spawn((screen_root(Color::srgba(0.0, 0.0, 0.0, 0.6)), PauseMenuUi))
        .with_children(|parent| {
            parent.spawn(label("PAUSED", 48.0, TEXT_COLOR, 40.0));
            spawn_menu_button(parent, "Resume", 220.0, MenuButton::Resume);
            spawn_menu_button(parent, "Main Menu", 220.0, MenuButton::MainMenu);
        });
}

/// Set up the game over screen.
fn setup_game_over(mut commands: Commands, score: Res<Score>, high_score: Res<HighScore>) {
    commands
        .spawn((screen_root(Color::srgba(0.1, 0.0, 0.0, 0.75)), GameOverUi))
        .with_children(|parent| {
            parent.spawn(label("GAME OVER", 72.0, Color::srgb(0.9, 0.25, 0.2), 30.0));
            parent.spawn(label(format!("Score: {}", score.points), 28.0, TEXT_COLOR, 8.0));
            parent.spawn(label(
                format!("High Score: {}", high_score.best),
                28.0,
                TEXT_COLOR,
                30.0,
            ));
            spawn_menu_button(parent, "Retry", 220.0, MenuButton::Retry);
            spawn_menu_button(parent, "Main Menu", 220.0, MenuButton::MainMenu);
        });
}

/// Carry out the action of any pressed button.
fn button_actions(
    interaction_query: Query<(&Interaction, &MenuButton), (Changed<Interaction>, With<Button>)>,
    mut next_state: ResMut<NextState<GameState>>,
    mut settings: Option<ResMut<Settings>>,
    mut restart_events: EventWriter<RestartEvent>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, button) in interaction_query.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            MenuButton::Start | MenuButton::Resume => next_state.set(GameState::Running),
            MenuButton::Settings => next_state.set(GameState::Settings),
            MenuButton::MainMenu | MenuButton::Back => next_state.set(GameState::Menu),
            MenuButton::Retry => {
                restart_events.send(RestartEvent);
            }
            MenuButton::Quit => {
                exit.send(AppExit::Success);
            }
            MenuButton::VolumeDown => {
                if let Some(settings) = settings.as_mut() {
                    settings.adjust_volume(-VOLUME_STEP);
                }
            }
            MenuButton::VolumeUp => {
                if let Some(settings) = settings.as_mut() {
                    settings.adjust_volume(VOLUME_STEP);
                }
            }
            MenuButton::Difficulty(difficulty) => {
                if let Some(settings) = settings.as_mut() {
                    settings.difficulty = *difficulty;
                }
            }
        }
    }
}

/// Hover and press feedback. The selected difficulty stays highlighted.
fn button_colors(
    settings: Option<Res<Settings>>,
    mut button_query: Query<(&Interaction, &MenuButton, &mut BackgroundColor), With<Button>>,
) {
    let selected = settings.map(|settings| settings.difficulty);

    for (interaction, button, mut bg_color) in button_query.iter_mut() {
        let color = match interaction {
            Interaction::Pressed => BUTTON_PRESSED,
            Interaction::Hovered => BUTTON_HOVERED,
            Interaction::None => match button {
                MenuButton::Difficulty(d) if Some(*d) == selected => BUTTON_SELECTED,
                _ => BUTTON_IDLE,
            },
        };
        if bg_color.0 != color {
            bg_color.0 = color;
        }
    }
}

/// Despawn every entity of one screen.
pub(super) fn despawn_screen<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
