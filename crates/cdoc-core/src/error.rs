//! Error types for cdoc-core.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON sidecar could not be decoded.
    #[error("Malformed doc comments JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The mapping could not be encoded as JSON.
    #[error("Failed to encode doc comments: {0}")]
    Encode(#[source] serde_json::Error),
}
