//! Persistence module - settings and the high score save file.

mod plugin;
mod save;
mod settings;
mod store;

pub use plugin::PersistencePlugin;
pub use save::{commit_high_score, PersistencePaths, SaveData};
pub use settings::{Difficulty, Settings, VOLUME_STEP};
