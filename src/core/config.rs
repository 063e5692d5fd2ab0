//! Gameplay tuning loaded from an external RON file.
//!
//! Allows tweaking speeds, sizes and spawn rates without recompilation. Every
//! field has a default, so a config file only needs the values it changes.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::RunnerError;

/// Default location of the gameplay config.
pub const GAME_CONFIG_PATH: &str = "assets/data/game_config.ron";

/// A background layer drawn behind the run.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ParallaxLayerDef {
    /// Image path relative to `assets/`
    pub image: String,
    /// Fraction of the scroll speed this layer moves at
    pub factor: f32,
    /// Draw depth (more negative = farther back)
    pub depth: f32,
}

/// Gameplay configuration loaded from assets/data/game_config.ron.
///
/// Units are pixels and seconds. World coordinates have the origin at the
/// screen center with y pointing up.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Screen
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,
    /// Player's horizontal position as a fraction of the screen width
    pub player_screen_fraction: f32,

    // Physics
    pub gravity: f32,
    pub jump_impulse: f32,

    // Pace
    pub base_speed: f32,
    pub speed_step: f32,
    /// Score points between speed increases
    pub speed_step_points: u32,
    pub max_speed: f32,

    // Sizes (width, height)
    pub player_size: (f32, f32),
    pub enemy_size: (f32, f32),
    pub obstacle_size: (f32, f32),
    pub potion_size: (f32, f32),
    /// Potions float this far above the ground
    pub potion_lift: f32,

    // Health
    pub max_health: f32,
    pub enemy_damage: f32,
    pub obstacle_damage: f32,
    pub potion_heal: f32,
    /// Seconds of invulnerability after taking damage
    pub invulnerability_secs: f32,

    // Spawning
    pub min_spawn_gap: f32,
    pub max_spawn_gap: f32,
    /// Spawned entities appear this far past the right screen edge
    pub spawn_margin: f32,
    pub obstacle_weight: f32,
    pub enemy_weight: f32,
    pub potion_base_weight: f32,
    pub seed_count: usize,
    /// Distance ahead of the player where the first seeded entity appears
    pub seed_lead: f32,
    pub seed_gap: (f32, f32),

    // Enemies
    pub patrol_range: f32,
    pub patrol_speed: (f32, f32),
    pub attack_range: f32,

    // Scoring
    pub distance_per_point: f32,
    pub pass_bonus: u32,

    // Animation
    pub player_frame_secs: f32,
    pub enemy_frame_secs: f32,

    // Background
    pub parallax_layers: Vec<ParallaxLayerDef>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 960.0,
            screen_height: 540.0,
            ground_height: 70.0,
            player_screen_fraction: 0.35,

            gravity: 2520.0,
            jump_impulse: 924.0,

            base_speed: 240.0,
            speed_step: 30.0,
            speed_step_points: 50,
            max_speed: 1080.0,

            player_size: (96.0, 128.0),
            enemy_size: (96.0, 128.0),
            obstacle_size: (64.0, 64.0),
            potion_size: (40.0, 40.0),
            potion_lift: 10.0,

            max_health: 100.0,
            enemy_damage: 34.0,
            obstacle_damage: 34.0,
            potion_heal: 34.0,
            invulnerability_secs: 1.0,

            min_spawn_gap: 600.0,
            max_spawn_gap: 1100.0,
            spawn_margin: 100.0,
            obstacle_weight: 0.60,
            enemy_weight: 0.35,
            potion_base_weight: 0.05,
            seed_count: 5,
            seed_lead: 500.0,
            seed_gap: (300.0, 500.0),

            patrol_range: 120.0,
            patrol_speed: (90.0, 150.0),
            attack_range: 160.0,

            distance_per_point: 100.0,
            pass_bonus: 5,

            player_frame_secs: 0.10,
            enemy_frame_secs: 0.14,

            parallax_layers: vec![
                ParallaxLayerDef {
                    image: "bg_far.png".to_string(),
                    factor: 0.25,
                    depth: -20.0,
                },
                ParallaxLayerDef {
                    image: "bg.png".to_string(),
                    factor: 0.6,
                    depth: -10.0,
                },
            ],
        }
    }
}

impl GameConfig {
    /// Load the config, falling back to defaults when the file is missing or
    /// malformed.
    pub fn load() -> Self {
        let path = Path::new(GAME_CONFIG_PATH);
        if !path.exists() {
            info!("No game config at {}, using defaults", GAME_CONFIG_PATH);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(config) => {
                info!("Loaded game config from {}", GAME_CONFIG_PATH);
                config
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Parse a config file.
    pub fn load_from(path: &Path) -> Result<Self, RunnerError> {
        let contents = fs::read_to_string(path).map_err(|e| RunnerError::Io {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

        ron::from_str(&contents).map_err(|e| RunnerError::CorruptConfig {
            path: path.display().to_string(),
            details: e.to_string(),
        })
    }

    /// Height of the ground surface in world coordinates.
    pub fn ground_y(&self) -> f32 {
        -self.screen_height / 2.0 + self.ground_height
    }

    /// X coordinate of the left screen edge.
    pub fn left_edge(&self) -> f32 {
        -self.screen_width / 2.0
    }

    /// X coordinate of the right screen edge.
    pub fn right_edge(&self) -> f32 {
        self.screen_width / 2.0
    }

    /// Fixed horizontal position of the player.
    pub fn player_x(&self) -> f32 {
        self.left_edge() + self.screen_width * self.player_screen_fraction
    }

    /// Where new entities are spawned.
    pub fn spawn_x(&self) -> f32 {
        self.right_edge() + self.spawn_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn derived_positions_match_screen_layout() {
        let config = GameConfig::default();
        assert_eq!(config.ground_y(), -200.0);
        assert_eq!(config.left_edge(), -480.0);
        assert!((config.player_x() - -144.0).abs() < 1e-3);
        assert!(config.spawn_x() > config.right_edge());
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(gravity: 1000.0, pass_bonus: 2)").unwrap();

        let config = GameConfig::load_from(file.path()).unwrap();
        assert_eq!(config.gravity, 1000.0);
        assert_eq!(config.pass_bonus, 2);
        assert_eq!(config.jump_impulse, GameConfig::default().jump_impulse);
    }

    #[test]
    fn malformed_config_reports_corrupt_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(gravity: \"heavy\"").unwrap();

        let err = GameConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, RunnerError::CorruptConfig { .. }));
    }
}
