//! Audio module - sound effects and background music.

mod cues;
mod plugin;

pub use cues::{Cue, CueQueue, SoundLibrary};
pub use plugin::GameAudioPlugin;
