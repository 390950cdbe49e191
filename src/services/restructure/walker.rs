use super::matcher::match_identity;
use super::normalizer::{entry_basename, sanitize_entry_name};
use super::types::{ArchiveFormat, FlaggedFile, MatchMode, RestructureSummary, UNASSIGNED_DIR};
use super::unwanted;
use crate::services::app::reporter::Reporter;
use crate::services::fs_utils::path_utils::join_contained;
use crate::types::errors::{CommandResult, RestructureError};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Walks a submission zip and materializes every file entry under
/// `target_root/<student>/<sanitized name>`.
///
/// Zips found among the extracted files are expanded exactly one level deep into
/// the same student directory and then deleted.
pub struct ArchiveWalker<'a> {
    target_root: &'a Path,
    mode: MatchMode,
    remove_enabled: bool,
    reporter: &'a dyn Reporter,
    last_group: Option<String>,
}

impl<'a> ArchiveWalker<'a> {
    pub fn new(
        target_root: &'a Path,
        mode: MatchMode,
        remove_enabled: bool,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            target_root,
            mode,
            remove_enabled,
            reporter,
            last_group: None,
        }
    }

    /// Extract and restructure every entry of `archive_path`, in archive order.
    ///
    /// Stops at the first I/O failure; files written before it stay on disk.
    pub fn walk(
        &mut self,
        archive_path: &Path,
        summary: &mut RestructureSummary,
    ) -> CommandResult<()> {
        let file = fs::File::open(archive_path)
            .map_err(|e| RestructureError::extraction_io(archive_path, e))?;
        let mut archive = zip::ZipArchive::new(file)
            .map_err(|e| RestructureError::invalid_archive(archive_path, e))?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| {
                RestructureError::invalid_archive(archive_path, format!("entry {i}: {e}"))
            })?;

            let entry_path = entry.name().replace('\\', "/");
            if entry.is_dir() {
                self.reporter.report(
                    log::Level::Debug,
                    &format!("Skipping directory entry: {entry_path}"),
                );
                continue;
            }

            let group = match match_identity(&entry_path, self.mode) {
                Some(key) => key,
                None => {
                    self.reporter.report(
                        log::Level::Warn,
                        &format!(
                            "No student identity in '{entry_path}', using {UNASSIGNED_DIR}"
                        ),
                    );
                    UNASSIGNED_DIR.to_string()
                }
            };
            self.announce(&group);

            let Some(destination) = self.destination_for(&group, &entry_path) else {
                continue;
            };

            write_entry(&mut entry, &destination)?;
            drop(entry);
            summary.files_extracted += 1;
            if group == UNASSIGNED_DIR {
                summary.unassigned_files += 1;
            } else {
                summary.record_student(&group);
            }

            let removed = self.apply_policy(&destination, summary)?;
            if !removed && ArchiveFormat::from_path(&destination) == Some(ArchiveFormat::Zip) {
                self.expand_nested(&destination, &group, summary)?;
            }
        }

        Ok(())
    }

    /// Flatten a nested zip into `group` and delete it afterwards.
    ///
    /// Zips inside the nested archive are written as plain files.
    fn expand_nested(
        &self,
        nested_path: &Path,
        group: &str,
        summary: &mut RestructureSummary,
    ) -> CommandResult<()> {
        let file = fs::File::open(nested_path)
            .map_err(|e| RestructureError::extraction_io(nested_path, e))?;
        let mut archive = match zip::ZipArchive::new(file) {
            Ok(archive) => archive,
            Err(e) => {
                self.reporter.report(
                    log::Level::Warn,
                    &format!(
                        "Keeping unreadable nested archive {}: {e}",
                        nested_path.display()
                    ),
                );
                return Ok(());
            }
        };

        self.reporter.report(
            log::Level::Info,
            &format!("Expanding nested archive {}", nested_path.display()),
        );

        // An inner file with the container's own name can only be written once
        // the container is gone.
        let mut deferred: Option<(PathBuf, Vec<u8>)> = None;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| {
                RestructureError::invalid_archive(nested_path, format!("entry {i}: {e}"))
            })?;
            if entry.is_dir() {
                continue;
            }

            let entry_path = entry.name().replace('\\', "/");
            let Some(destination) = self.destination_for(group, &entry_path) else {
                continue;
            };

            if destination.as_path() == nested_path {
                let mut bytes = Vec::new();
                entry
                    .read_to_end(&mut bytes)
                    .map_err(|e| RestructureError::extraction_io(&destination, e))?;
                deferred = Some((destination, bytes));
                continue;
            }

            write_entry(&mut entry, &destination)?;
            drop(entry);
            summary.files_extracted += 1;
            self.apply_policy(&destination, summary)?;
        }

        drop(archive);
        fs::remove_file(nested_path)
            .map_err(|e| RestructureError::extraction_io(nested_path, e))?;
        summary.nested_archives_expanded += 1;

        if let Some((destination, bytes)) = deferred {
            write_entry(&mut bytes.as_slice(), &destination)?;
            summary.files_extracted += 1;
            self.apply_policy(&destination, summary)?;
        }

        Ok(())
    }

    /// Compute `target_root/group/sanitized-basename`, or `None` if the entry
    /// has no usable file name.
    fn destination_for(&self, group: &str, entry_path: &str) -> Option<PathBuf> {
        let filename = sanitize_entry_name(entry_basename(entry_path));
        let destination = match filename.as_str() {
            "" | "." | ".." => None,
            _ => join_contained(self.target_root, &Path::new(group).join(&filename)),
        };

        let Some(destination) = destination else {
            self.reporter.report(
                log::Level::Warn,
                &format!("Skipping entry without a usable file name: '{entry_path}'"),
            );
            return None;
        };

        self.reporter.report(
            log::Level::Debug,
            &format!(
                "\n\tTarget: {}\n\tDirectory: {group}\n\tFilename: {filename}\n\tFull: {}",
                self.target_root.display(),
                destination.display()
            ),
        );
        Some(destination)
    }

    /// Run the unwanted-file policy; returns whether the file was deleted.
    fn apply_policy(
        &self,
        destination: &Path,
        summary: &mut RestructureSummary,
    ) -> CommandResult<bool> {
        let verdict = unwanted::enforce(destination, self.remove_enabled, self.reporter)
            .map_err(|e| RestructureError::extraction_io(destination, e))?;

        if verdict.is_flagged() {
            summary.flagged.push(FlaggedFile {
                path: destination.to_string_lossy().to_string(),
                kind: verdict.kind,
                removed: verdict.removed,
            });
        }
        Ok(verdict.removed)
    }

    fn announce(&mut self, group: &str) {
        if self.last_group.as_deref() != Some(group) {
            self.reporter
                .report(log::Level::Info, &format!("Student: {group}"));
            self.last_group = Some(group.to_string());
        }
    }
}

/// Create `dirname(destination)` and copy `reader` into `destination`,
/// replacing any existing file.
fn write_entry<R: Read + ?Sized>(reader: &mut R, destination: &Path) -> CommandResult<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| RestructureError::MissingDestinationParent {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut outfile = fs::File::create(destination)
        .map_err(|e| RestructureError::extraction_io(destination, e))?;
    io::copy(reader, &mut outfile).map_err(|e| RestructureError::extraction_io(destination, e))?;
    Ok(())
}
