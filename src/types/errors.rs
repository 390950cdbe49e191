use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestructureError {
    #[error("Ambiguous archive: {0}")]
    AmbiguousArchive(String),
    #[error("Archive type {extension} not implemented: {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },
    #[error("Invalid or corrupt ZIP {}: {reason}", .path.display())]
    InvalidArchive { path: PathBuf, reason: String },
    #[error("Failed to create directory {}: {source}", .path.display())]
    MissingDestinationParent {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to extract {}: {source}", .path.display())]
    ExtractionIo {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(String),
}

impl RestructureError {
    pub(crate) fn extraction_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RestructureError::ExtractionIo {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_archive(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        RestructureError::InvalidArchive {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl Serialize for RestructureError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type CommandResult<T> = Result<T, RestructureError>;
