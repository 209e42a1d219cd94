//! Record source errors

use std::path::PathBuf;

use thiserror::Error;

use super::student::StudentId;

/// Result type for record source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Failures while acquiring a roster snapshot
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed roster {origin}: {reason}")]
    Malformed { origin: String, reason: String },

    #[error("Duplicate student id {0} in roster")]
    DuplicateId(StudentId),
}

impl SourceError {
    /// Create a malformed roster error
    pub fn malformed(origin: impl Into<String>, reason: impl Into<String>) -> Self {
        SourceError::Malformed {
            origin: origin.into(),
            reason: reason.into(),
        }
    }
}
