//! Player settings: volume and difficulty.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::store::{read_optional, write_ron};
use crate::core::RunnerError;

/// Volume change per press of the settings buttons.
pub const VOLUME_STEP: f32 = 0.1;

const DEFAULT_VOLUME: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Multiplier on the base scroll speed.
    pub fn speed_modifier(self) -> f32 {
        match self {
            Difficulty::Easy => 0.85,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.25,
        }
    }

    /// Multiplier on the base potion spawn weight.
    pub fn potion_factor(self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Persisted player settings.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master volume, 0.0 to 1.0
    pub volume: f32,
    pub difficulty: Difficulty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
            difficulty: Difficulty::default(),
        }
    }
}

impl Settings {
    /// Pull the volume back into range. Returns the offending value as an
    /// error if anything had to change.
    pub fn sanitize(&mut self) -> Result<(), RunnerError> {
        let value = self.volume;
        if value.is_nan() {
            self.volume = DEFAULT_VOLUME;
        } else if !(0.0..=1.0).contains(&value) {
            self.volume = value.clamp(0.0, 1.0);
        } else {
            return Ok(());
        }
        Err(RunnerError::InputOutOfRange {
            field: "volume",
            value,
        })
    }

    /// Step the volume, snapping to tenths and staying within 0.0..=1.0.
    pub fn adjust_volume(&mut self, delta: f32) {
        self.volume = (((self.volume + delta) * 10.0).round() / 10.0).clamp(0.0, 1.0);
    }

    /// Parse a settings file. `Ok(None)` means there is no file yet.
    pub fn load_from(path: &Path) -> Result<Option<Self>, RunnerError> {
        let Some(contents) = read_optional(path)? else {
            return Ok(None);
        };
        ron::from_str(&contents)
            .map(Some)
            .map_err(|e| RunnerError::CorruptSettings {
                path: path.display().to_string(),
                details: e.to_string(),
            })
    }

    /// Load settings, falling back to defaults on any problem.
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(mut settings)) => {
                if let Err(e) = settings.sanitize() {
                    warn!("{}. Clamped to {:.1}.", e, settings.volume);
                }
                info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{}. Using default settings.", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), RunnerError> {
        write_ron(self, path)
    }
}
