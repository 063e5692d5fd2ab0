//! Error types for assets, configuration and persisted files.

use thiserror::Error;

/// Errors the runner can hit outside the frame loop.
///
/// Only `MissingAsset` is fatal; everything else is logged and replaced by
/// a default.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A required sprite is not on disk.
    #[error("Missing asset: {path}")]
    MissingAsset { path: String },

    /// The save file exists but could not be parsed.
    #[error("Corrupt save data in '{path}': {details}")]
    CorruptSaveData { path: String, details: String },

    /// The settings file exists but could not be parsed.
    #[error("Corrupt settings in '{path}': {details}")]
    CorruptSettings { path: String, details: String },

    /// The game config file exists but could not be parsed.
    #[error("Corrupt game config in '{path}': {details}")]
    CorruptConfig { path: String, details: String },

    /// A loaded value was outside its valid range and got clamped.
    #[error("Value {value} for '{field}' is out of range")]
    InputOutOfRange { field: &'static str, value: f32 },

    /// File could not be read or written.
    #[error("I/O error on '{path}': {details}")]
    Io { path: String, details: String },
}
