//! Submission archive restructuring: one directory per student.
//!
//! Entries are grouped by an identity token found in their path, renamed to a
//! sanitized basename and screened for unwanted files. Nested zips are
//! flattened one level into the owning student's directory.

pub mod engine;
pub mod matcher;
pub mod normalizer;
pub mod types;
pub mod unwanted;
pub mod walker;

// Re-export public API
pub use engine::RestructureEngine;
pub use matcher::match_identity;
pub use normalizer::sanitize_entry_name;
pub use types::{
    ArchiveFormat, FlaggedFile, MatchMode, RestructureSummary, UnwantedKind, UnwantedVerdict,
    UNASSIGNED_DIR,
};
pub use walker::ArchiveWalker;

#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod matcher_tests;

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod normalizer_tests;

#[cfg(test)]
#[path = "tests/unwanted_tests.rs"]
mod unwanted_tests;

#[cfg(test)]
#[path = "tests/walker_tests.rs"]
mod walker_tests;

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod engine_tests;
