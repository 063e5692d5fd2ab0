//! In-run HUD - health bar, score and high score.

use bevy::prelude::*;

use crate::combat::Health;
use crate::core::InRun;
use crate::player::Player;
use crate::score::{HighScore, Score};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for the score readout.
#[derive(Component)]
pub struct ScoreText;

/// Marker for the high score readout.
#[derive(Component)]
pub struct HighScoreText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(InRun), spawn_hud)
        .add_systems(OnExit(InRun), cleanup_hud)
        .add_systems(
            Update,
            (update_health_bar, update_score_text).run_if(in_state(InRun)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    // HUD root container (top-left corner)
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Start,
                align_items: AlignItems::Start,
                padding: UiRect::all(Val::Px(16.0)),
                position_type: PositionType::Absolute,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            spawn_health_bar(parent);
            spawn_readout(parent, "Score: 0", ScoreText);
            spawn_readout(parent, "High Score: 0", HighScoreText);
        });
}

fn spawn_health_bar(parent: &mut ChildBuilder) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(6.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            // Label
            bar_parent.spawn((
                Text::new("Health"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.95, 0.95)),
                Node {
                    width: Val::Px(70.0),
                    ..default()
                },
            ));

            // Bar background
            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(200.0),
                        height: Val::Px(16.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.05, 0.05)),
                ))
                .with_children(|bg| {
                    // Bar fill
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                        HealthBar,
                    ));
                });
        });
}

fn spawn_readout(parent: &mut ChildBuilder, text: &str, marker: impl Component) {
    parent.spawn((
        Text::new(text),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        marker,
    ));
}

/// Update health bar based on player health.
fn update_health_bar(
    player_query: Query<&Health, With<Player>>,
    mut bar_query: Query<&mut Node, With<HealthBar>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };
    let Ok(mut bar) = bar_query.get_single_mut() else {
        return;
    };

    bar.width = Val::Percent(health.percentage() * 100.0);
}

fn update_score_text(
    score: Res<Score>,
    high_score: Res<HighScore>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<HighScoreText>)>,
    mut high_query: Query<&mut Text, (With<HighScoreText>, Without<ScoreText>)>,
) {
    if !score.is_changed() && !high_score.is_changed() {
        return;
    }
    for mut text in score_query.iter_mut() {
        text.0 = format!("Score: {}", score.points);
    }
    for mut text in high_query.iter_mut() {
        // The best so far, including the run in progress
        text.0 = format!("High Score: {}", high_score.best.max(score.points));
    }
}

/// Clean up HUD entities.
fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
