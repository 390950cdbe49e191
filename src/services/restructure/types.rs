use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory that receives entries without a recognizable student identity.
pub const UNASSIGNED_DIR: &str = "_unassigned";

/// Supported archive format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArchiveFormat {
    Zip,
}

impl ArchiveFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "zip" => Some(Self::Zip),
            _ => None,
        }
    }
}

/// How an entry path is turned into a student identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Course identifier such as `cswh1234`.
    ByIdentifier,
    /// `Firstname_Lastname` token.
    #[default]
    ByName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnwantedKind {
    None,
    FlaggedExtension,
    FlaggedName,
}

/// Outcome of running the unwanted-file policy on one extracted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwantedVerdict {
    pub kind: UnwantedKind,
    pub removed: bool,
}

impl UnwantedVerdict {
    pub fn is_flagged(&self) -> bool {
        self.kind != UnwantedKind::None
    }
}

/// A flagged file as it appears in the run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedFile {
    pub path: String,
    pub kind: UnwantedKind,
    pub removed: bool,
}

/// Result of a restructuring run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestructureSummary {
    pub archive_name: String,
    pub target_root: String,
    pub files_extracted: usize,
    /// Distinct student directories, in first-seen order.
    pub students: Vec<String>,
    pub unassigned_files: usize,
    pub flagged: Vec<FlaggedFile>,
    pub nested_archives_expanded: usize,
}

impl RestructureSummary {
    pub(crate) fn record_student(&mut self, group: &str) {
        if !self.students.iter().any(|s| s == group) {
            self.students.push(group.to_string());
        }
    }
}
