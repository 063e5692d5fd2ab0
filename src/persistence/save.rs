//! The high score save file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::store::{read_optional, write_ron};
use crate::core::RunnerError;
use crate::score::HighScore;

/// Where settings and the save file live.
#[derive(Resource, Debug, Clone)]
pub struct PersistencePaths {
    pub settings: PathBuf,
    pub save: PathBuf,
}

impl Default for PersistencePaths {
    fn default() -> Self {
        Self {
            settings: PathBuf::from("settings.ron"),
            save: PathBuf::from("save.ron"),
        }
    }
}

/// Contents of the save file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub high_score: u32,
}

impl SaveData {
    /// Parse a save file. `Ok(None)` means there is no file yet.
    pub fn load_from(path: &Path) -> Result<Option<Self>, RunnerError> {
        let Some(contents) = read_optional(path)? else {
            return Ok(None);
        };
        ron::from_str(&contents)
            .map(Some)
            .map_err(|e| RunnerError::CorruptSaveData {
                path: path.display().to_string(),
                details: e.to_string(),
            })
    }

    /// Load the save file, starting from zero on any problem.
    pub fn load(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(Some(data)) => {
                info!("Loaded high score {} from {}", data.high_score, path.display());
                data
            }
            Ok(None) => {
                info!("No save file at {}, starting fresh", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("{}. High score reset to 0.", e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), RunnerError> {
        write_ron(self, path)
    }
}

/// Record `points` as the new high score if it beats the old one, and write
/// the save file when it does. Returns whether the high score changed.
pub fn commit_high_score(high_score: &mut HighScore, points: u32, path: &Path) -> bool {
    if !high_score.record(points) {
        return false;
    }

    info!("New high score: {}", high_score.best);
    let data = SaveData {
        high_score: high_score.best,
    };
    if let Err(e) = data.save_to(path) {
        error!("Failed to save high score: {}", e);
    }
    true
}
