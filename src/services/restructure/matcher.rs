//! Student identity extraction from archive entry paths.

use super::types::MatchMode;
use regex::Regex;
use std::sync::LazyLock;

/// Course identifier, e.g. `cswh1234`.
static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cs[a-z]{2}[0-9]+").expect("Invalid regex"));

/// Student name as exported by the LMS, e.g. `Gurney_Halleck`.
static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+_[A-Z][a-z]+").expect("Invalid regex"));

/// Extract the first course identifier token from `path`.
pub fn match_identifier(path: &str) -> Option<String> {
    RE_IDENTIFIER.find(path).map(|m| m.as_str().to_string())
}

/// Extract the first `Capitalized_Capitalized` token from `path`.
pub fn match_name(path: &str) -> Option<String> {
    RE_NAME.find(path).map(|m| m.as_str().to_string())
}

/// Derive the identity key for `path` using `mode`.
///
/// `None` means the entry could not be attributed to a student; callers route it
/// to the unassigned directory instead of failing.
pub fn match_identity(path: &str, mode: MatchMode) -> Option<String> {
    match mode {
        MatchMode::ByIdentifier => match_identifier(path),
        MatchMode::ByName => match_name(path),
    }
}
