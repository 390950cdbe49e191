//! Run configuration and its optional JSON file.

pub mod models;

pub use models::{RestructureConfig, DEFAULT_TARGET_ROOT};

use crate::services::restructure::types::MatchMode;
use crate::types::errors::{CommandResult, RestructureError};
use std::path::{Path, PathBuf};

/// Load a config file. Missing fields take their defaults.
pub fn load_config(path: &Path) -> CommandResult<RestructureConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RestructureError::Config(format!("Failed to read {}: {e}", path.display()))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        RestructureError::Config(format!("Failed to parse {}: {e}", path.display()))
    })
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub cs_identifier: bool,
    pub remove_unwanted: bool,
    pub target_root: Option<PathBuf>,
}

impl RestructureConfig {
    /// Apply overrides. Boolean flags can only switch a behavior on.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.cs_identifier {
            self.mode = MatchMode::ByIdentifier;
        }
        if overrides.remove_unwanted {
            self.remove_unwanted = true;
        }
        if let Some(target_root) = overrides.target_root {
            self.target_root = target_root;
        }
        self
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
