//! Parallax background and the ground strip.

use bevy::prelude::*;

use super::components::RunEntity;
use crate::assets::SpriteLibrary;
use crate::core::GameConfig;
use crate::score::Score;

/// One of the two side-by-side tiles of a background layer.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParallaxLayer {
    /// Fraction of the scroll speed
    pub factor: f32,
    pub tile_width: f32,
    /// 0 for the left tile, 1 for the right one
    pub tile: u8,
}

/// How far a layer has slid left, wrapped to one tile.
pub fn layer_offset(distance: f32, factor: f32, tile_width: f32) -> f32 {
    if tile_width <= 0.0 {
        return 0.0;
    }
    (distance * factor).rem_euclid(tile_width)
}

/// Spawn every background layer whose image is available, plus the ground.
pub fn spawn_background(commands: &mut Commands, config: &GameConfig, library: &SpriteLibrary) {
    let size = Vec2::new(config.screen_width, config.screen_height);

    for (def, image) in config.parallax_layers.iter().zip(&library.backgrounds) {
        let Some(image) = image else {
            continue;
        };
        for tile in 0..2u8 {
            commands.spawn((
                ParallaxLayer {
                    factor: def.factor,
                    tile_width: config.screen_width,
                    tile,
                },
                Sprite {
                    image: image.clone(),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_xyz(tile as f32 * config.screen_width, 0.0, def.depth),
                RunEntity,
            ));
        }
    }

    commands.spawn((
        Sprite::from_color(
            Color::srgb(0.63, 0.47, 0.24),
            Vec2::new(config.screen_width, config.ground_height),
        ),
        Transform::from_xyz(0.0, config.ground_y() - config.ground_height / 2.0, 1.0),
        RunEntity,
    ));
}

/// Slide the background tiles by the distance travelled this run.
pub fn update_parallax(score: Res<Score>, mut query: Query<(&ParallaxLayer, &mut Transform)>) {
    for (layer, mut transform) in query.iter_mut() {
        let offset = layer_offset(score.distance, layer.factor, layer.tile_width);
        transform.translation.x = layer.tile as f32 * layer.tile_width - offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_wraps_within_one_tile() {
        assert_eq!(layer_offset(0.0, 0.5, 960.0), 0.0);
        assert_eq!(layer_offset(400.0, 0.5, 960.0), 200.0);
        assert_eq!(layer_offset(2000.0, 0.5, 960.0), 40.0);
        assert_eq!(layer_offset(100.0, 1.0, 0.0), 0.0);
    }

    #[test]
    fn farther_layers_move_slower() {
        let near = layer_offset(300.0, 0.6, 960.0);
        let far = layer_offset(300.0, 0.25, 960.0);
        assert!(far < near);
    }
}
