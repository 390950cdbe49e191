use super::types::{ArchiveFormat, RestructureSummary};
use super::walker::ArchiveWalker;
use crate::services::app::reporter::{LogReporter, Reporter};
use crate::services::config::RestructureConfig;
use crate::types::errors::{CommandResult, RestructureError};
use std::path::Path;

/// Top-level driver for one restructuring run.
///
/// Holds the run configuration and the reporter; every call to [`run`](Self::run)
/// walks one archive into `config.target_root`.
pub struct RestructureEngine<R: Reporter = LogReporter> {
    config: RestructureConfig,
    reporter: R,
}

impl RestructureEngine<LogReporter> {
    pub fn with_log_reporter(config: RestructureConfig) -> Self {
        Self::new(config, LogReporter)
    }
}

impl<R: Reporter> RestructureEngine<R> {
    pub fn new(config: RestructureConfig, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &RestructureConfig {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Restructure `archive_path` into one directory per student.
    ///
    /// Fails with [`RestructureError::UnsupportedFormat`] before touching the file
    /// system if the archive is not a zip. Output already written when a later
    /// error occurs is left in place.
    pub fn run(&self, archive_path: &Path) -> CommandResult<RestructureSummary> {
        let format = ArchiveFormat::from_path(archive_path).ok_or_else(|| {
            RestructureError::UnsupportedFormat {
                path: archive_path.to_path_buf(),
                extension: display_extension(archive_path),
            }
        })?;

        let target_root = &self.config.target_root;
        self.reporter.report(
            log::Level::Info,
            &format!(
                "Extracting '{}' to '{}'",
                archive_path.display(),
                target_root.display()
            ),
        );

        let mut summary = RestructureSummary {
            archive_name: archive_path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default(),
            target_root: target_root.to_string_lossy().to_string(),
            ..Default::default()
        };

        match format {
            ArchiveFormat::Zip => {
                let mut walker = ArchiveWalker::new(
                    target_root,
                    self.config.mode,
                    self.config.remove_unwanted,
                    &self.reporter,
                );
                walker.walk(archive_path, &mut summary)?;
            }
        }

        self.reporter.report(
            log::Level::Info,
            &format!(
                "Extracted {} files for {} students ({} unassigned, {} flagged)",
                summary.files_extracted,
                summary.students.len(),
                summary.unassigned_files,
                summary.flagged.len()
            ),
        );

        Ok(summary)
    }
}

/// Extension as shown to the user; keeps `.tar.gz` whole.
fn display_extension(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if name.ends_with(".tar.gz") {
        return ".tar.gz".to_string();
    }

    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => "(none)".to_string(),
    }
}
