//! Sprite paths and the handles loaded from them.
//!
//! All paths are relative to the `assets/` directory, which is also the
//! root the asset server reads from.

use bevy::prelude::*;
use std::path::Path;

use crate::animation::{AnimState, AnimationClips};
use crate::core::{GameConfig, RunnerError};

/// Directory the asset server loads from.
pub const ASSET_ROOT: &str = "assets";

pub const LOGO: &str = "logo.png";
const OBSTACLE: &str = "box.png";
const POTION: &str = "potion.png";

/// `{prefix}_0.png` .. `{prefix}_{count - 1}.png`
fn frame_paths(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}_{i}.png")).collect()
}

fn player_clips() -> Vec<(AnimState, Vec<String>)> {
    vec![
        (AnimState::Run, frame_paths("player_run", 6)),
        (AnimState::Idle, frame_paths("player_idle", 4)),
        (AnimState::Jump, vec!["player_jump.png".to_string()]),
        (AnimState::Dead, vec!["player_dead.png".to_string()]),
    ]
}

fn enemy_clips() -> Vec<(AnimState, Vec<String>)> {
    vec![
        (AnimState::Patrol, frame_paths("enemy_run", 4)),
        (AnimState::Idle, frame_paths("enemy_idle", 2)),
        (AnimState::Attack, frame_paths("enemy_attack", 3)),
        (AnimState::Dead, vec!["enemy_dead.png".to_string()]),
    ]
}

/// Every sprite the game cannot run without.
pub fn required_sprites() -> Vec<String> {
    player_clips()
        .into_iter()
        .chain(enemy_clips())
        .flat_map(|(_, frames)| frames)
        .chain([OBSTACLE.to_string(), POTION.to_string()])
        .collect()
}

/// A `MissingAsset` error for each required sprite absent under `root`.
pub fn missing_required(root: &Path) -> Vec<RunnerError> {
    required_sprites()
        .into_iter()
        .filter(|path| !root.join(path).is_file())
        .map(|path| RunnerError::MissingAsset { path })
        .collect()
}

/// Image handles for everything drawn during a run.
#[derive(Resource, Debug, Clone, Default)]
pub struct SpriteLibrary {
    pub player: AnimationClips,
    pub enemy: AnimationClips,
    pub obstacle: Handle<Image>,
    pub potion: Handle<Image>,
    /// One entry per configured parallax layer, `None` when its image is absent
    pub backgrounds: Vec<Option<Handle<Image>>>,
    pub logo: Option<Handle<Image>>,
}

impl SpriteLibrary {
    /// Build the library. `load` turns a path into a handle; `exists` says
    /// whether an optional file is present.
    pub fn build(
        config: &GameConfig,
        mut load: impl FnMut(&str) -> Handle<Image>,
        exists: impl Fn(&str) -> bool,
    ) -> Self {
        let mut clips = |defs: Vec<(AnimState, Vec<String>)>| {
            defs.into_iter()
                .fold(AnimationClips::default(), |clips, (state, frames)| {
                    clips.with_clip(state, frames.iter().map(|f| load(f)).collect())
                })
        };
        let player = clips(player_clips());
        let enemy = clips(enemy_clips());

        let mut optional = |path: &str| {
            if exists(path) {
                Some(load(path))
            } else {
                warn!("Optional asset {} not found", path);
                None
            }
        };
        let backgrounds = config
            .parallax_layers
            .iter()
            .map(|layer| optional(&layer.image))
            .collect();
        let logo = optional(LOGO);

        Self {
            player,
            enemy,
            obstacle: load(OBSTACLE),
            potion: load(POTION),
            backgrounds,
            logo,
        }
    }
}
