//! Assets plugin - validates sprites and builds the library during
//! `Loading`.

use bevy::prelude::*;
use std::path::Path;

use super::library::{missing_required, SpriteLibrary, ASSET_ROOT};
use crate::core::{GameConfig, GameState};

/// Assets plugin - fails fast when required sprites are missing.
pub struct AssetsPlugin;

impl Plugin for AssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_sprites);
    }
}

fn load_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    let root = Path::new(ASSET_ROOT);
    let missing = missing_required(root);
    if !missing.is_empty() {
        for e in &missing {
            error!("{}", e);
        }
        error!(
            "{} required sprite(s) missing from {}/, cannot start",
            missing.len(),
            ASSET_ROOT
        );
        exit.send(AppExit::error());
        return;
    }

    let library = SpriteLibrary::build(
        &config,
        |path| asset_server.load(path.to_string()),
        |path| root.join(path).is_file(),
    );
    commands.insert_resource(library);

    info!("Sprites loaded");
    next_state.set(GameState::Menu);
}
