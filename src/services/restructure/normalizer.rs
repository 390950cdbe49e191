//! Filename normalization for extracted entries.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of two or more underscores.
static RE_UNDERSCORE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{2,}").expect("Invalid regex"));

/// Basename of an archive-internal path.
///
/// Backslash separators written by some Windows zip tools are treated like `/`.
/// Directory entries (trailing separator) yield an empty string.
pub fn entry_basename(entry_path: &str) -> &str {
    entry_path
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(entry_path)
}

/// Sanitize an entry basename.
///
/// Spaces become `_`, then runs of `_` collapse into one. Case and extension
/// are left alone.
pub fn sanitize_entry_name(basename: &str) -> String {
    let spaced = basename.replace(' ', "_");
    RE_UNDERSCORE_RUN.replace_all(&spaced, "_").to_string()
}
