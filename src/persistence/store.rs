//! RON file helpers shared by the settings and save files.

use ron::ser::PrettyConfig;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::RunnerError;

/// Read a file, treating a missing file as `None` rather than an error.
pub(crate) fn read_optional(path: &Path) -> Result<Option<String>, RunnerError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(RunnerError::Io {
            path: path.display().to_string(),
            details: e.to_string(),
        }),
    }
}

/// Serialize `value` as pretty RON and write it to `path`.
pub(crate) fn write_ron<T: Serialize>(value: &T, path: &Path) -> Result<(), RunnerError> {
    let io_error = |details: String| RunnerError::Io {
        path: path.display().to_string(),
        details,
    };

    let contents = ron::ser::to_string_pretty(value, PrettyConfig::new().depth_limit(2))
        .map_err(|e| io_error(e.to_string()))?;
    fs::write(path, contents).map_err(|e| io_error(e.to_string()))
}
