//! Detection (and optional removal) of files that should not be in a submission.

use super::types::{UnwantedKind, UnwantedVerdict};
use crate::services::app::reporter::Reporter;
use std::fs;
use std::path::Path;

/// Extensions that are reported but always kept.
const FLAGGED_EXTENSIONS: &[&str] = &["docx", "exe", "png"];

/// IDE and VCS leftovers, removed when removal is enabled.
const FLAGGED_NAMES: &[&str] = &[".vscode", ".idea", ".gitignore"];

/// Classify a basename. Matching is exact and case-sensitive.
pub fn classify(basename: &str) -> UnwantedKind {
    if FLAGGED_NAMES.contains(&basename) {
        return UnwantedKind::FlaggedName;
    }

    let extension = Path::new(basename).extension().and_then(|e| e.to_str());
    match extension {
        Some(ext) if FLAGGED_EXTENSIONS.contains(&ext) => UnwantedKind::FlaggedExtension,
        _ => UnwantedKind::None,
    }
}

/// Evaluate an already-extracted file and delete it if the policy says so.
///
/// Only name-flagged files are ever deleted, and only with `remove_enabled`.
pub fn enforce(
    extracted: &Path,
    remove_enabled: bool,
    reporter: &dyn Reporter,
) -> std::io::Result<UnwantedVerdict> {
    let basename = extracted
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let kind = classify(&basename);
    let mut removed = false;

    match kind {
        UnwantedKind::None => {}
        UnwantedKind::FlaggedExtension => {
            reporter.report(
                log::Level::Warn,
                &format!("Unwanted file type kept: {}", extracted.display()),
            );
        }
        UnwantedKind::FlaggedName if remove_enabled => {
            fs::remove_file(extracted)?;
            removed = true;
            reporter.report(
                log::Level::Info,
                &format!("Removed unwanted file: {}", extracted.display()),
            );
        }
        UnwantedKind::FlaggedName => {
            reporter.report(
                log::Level::Warn,
                &format!("Unwanted file found: {}", extracted.display()),
            );
        }
    }

    Ok(UnwantedVerdict { kind, removed })
}
