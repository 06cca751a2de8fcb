//! The JSON sidecar file: a flat object from identifier to comment text.

use std::fs;
use std::path::Path;

use crate::error::CoreError;
use crate::mapping::CommentMap;

/// Read a sidecar file.
///
/// # Errors
/// Returns `CoreError::Io` if the file cannot be read and `CoreError::Json`
/// if it is not a flat object of strings.
pub fn load(path: &Path) -> Result<CommentMap, CoreError> {
    let raw = fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a sidecar file, keys sorted, pretty-printed with a final newline.
///
/// # Errors
/// Returns `CoreError::Io` if the file cannot be written.
pub fn save(path: &Path, docs: &CommentMap) -> Result<(), CoreError> {
    let mut json = serde_json::to_string_pretty(docs).map_err(CoreError::Encode)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
