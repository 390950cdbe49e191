//! Locating the submission archive inside a working directory.

use crate::types::errors::{CommandResult, RestructureError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Suffixes considered candidate archives. Only zip is extractable; the rest are
/// listed so the user gets a clear "not implemented" instead of "not found".
const ARCHIVE_SUFFIXES: &[&str] = &[".zip", ".tar.gz"];

#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveInfo {
    pub path: PathBuf,
    pub name: String,
}

/// List candidate archives directly inside `dir`, sorted by name.
pub fn detect_archives(dir: &Path) -> CommandResult<Vec<ArchiveInfo>> {
    if !dir.is_dir() {
        return Err(RestructureError::AmbiguousArchive(format!(
            "Directory does not exist: {}",
            dir.display()
        )));
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| RestructureError::extraction_io(dir, e))?;

    let mut archives = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let lower = name.to_lowercase();
        if !ARCHIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            continue;
        }

        archives.push(ArchiveInfo { path, name });
    }

    archives.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(archives)
}

/// Pick one archive out of `candidates`.
///
/// A single candidate is returned as-is. With several, the list is written to
/// `output` and an index is read from `input`, but only when `interactive`.
pub fn select_archive<R: BufRead, W: Write>(
    candidates: &[ArchiveInfo],
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> CommandResult<PathBuf> {
    match candidates {
        [] => Err(RestructureError::AmbiguousArchive(
            "No .zip or .tar.gz archive found".to_string(),
        )),
        [only] => Ok(only.path.clone()),
        _ if !interactive => {
            let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
            Err(RestructureError::AmbiguousArchive(format!(
                "More than one archive found ({}), pass one with --archive",
                names.join(", ")
            )))
        }
        _ => prompt_selection(candidates, input, output),
    }
}

fn prompt_selection<R: BufRead, W: Write>(
    candidates: &[ArchiveInfo],
    input: &mut R,
    output: &mut W,
) -> CommandResult<PathBuf> {
    let prompt_failed =
        |e: std::io::Error| RestructureError::AmbiguousArchive(format!("Selection failed: {e}"));

    log::warn!("More than one archive found, please specify:");
    for (index, candidate) in candidates.iter().enumerate() {
        writeln!(output, "\t{index}: {}", candidate.name).map_err(prompt_failed)?;
    }
    output.flush().map_err(prompt_failed)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(prompt_failed)?;
    let answer = line.trim();

    answer
        .parse::<usize>()
        .ok()
        .and_then(|index| candidates.get(index))
        .map(|c| c.path.clone())
        .ok_or_else(|| RestructureError::AmbiguousArchive(format!("Invalid selection '{answer}'")))
}

/// Detect and select in one step.
pub fn resolve_archive<R: BufRead, W: Write>(
    dir: &Path,
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> CommandResult<PathBuf> {
    let candidates = detect_archives(dir)?;
    log::debug!("Found {} candidate archive(s) in {}", candidates.len(), dir.display());
    select_archive(&candidates, interactive, input, output)
}

#[cfg(test)]
#[path = "tests/discovery_tests.rs"]
mod tests;
