//! Configuration sections.

use serde::{Deserialize, Serialize};

const DEFAULT_SIDECAR: &str = "doc_comments.json";

fn default_sidecar_path() -> String {
    DEFAULT_SIDECAR.to_string()
}

/// Where the JSON sidecar lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SidecarConfig {
    /// Written by `cdoc2json`, read by `addcdocs`.
    #[serde(default = "default_sidecar_path")]
    pub path: String,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            path: default_sidecar_path(),
        }
    }
}

/// Arguments passed to the parser for every file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub args: Vec<String>,
}
