use crate::services::restructure::types::MatchMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default output directory, relative to the current directory.
pub const DEFAULT_TARGET_ROOT: &str = "./submissions";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RestructureConfig {
    pub mode: MatchMode,
    pub remove_unwanted: bool,
    pub target_root: PathBuf,
}

impl Default for RestructureConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::ByName,
            remove_unwanted: false,
            target_root: PathBuf::from(DEFAULT_TARGET_ROOT),
        }
    }
}
