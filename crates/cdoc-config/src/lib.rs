//! # cdoc-config
//!
//! Layered configuration loading for the cdoc tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CDOC_*` prefix, `__` as separator)
//! 2. Project-level `cdoc.toml` in the current directory
//! 3. User-level `~/.config/cdoc/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binaries.
//!
//! # Environment Variable Mapping
//!
//! `CDOC_SIDECAR__PATH` -> `sidecar.path`, `CDOC_PARSER__ARGS` -> `parser.args`
//! (given as a TOML array, e.g. `'["-x", "c++"]'`).

mod error;
mod sections;

pub use error::ConfigError;
pub use sections::{ParserConfig, SidecarConfig};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Name of the project-level config file.
pub const PROJECT_CONFIG: &str = "cdoc.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CdocConfig {
    #[serde(default)]
    pub sidecar: SidecarConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

impl CdocConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns [`ConfigError::Figment`] when a source is malformed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CDOC_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cdoc").join("config.toml"))
    }
}
