//! Query engine error types
//!
//! Error codes:
//! - ROSTER_SOURCE_UNAVAILABLE: the roster could not be read
//! - ROSTER_CORRUPT: the roster was read but is not a valid roster
//!
//! "No matching records" is never an error. Engine operations only fail when
//! a snapshot cannot be acquired.

use std::fmt;

use crate::roster::SourceError;

/// Query engine error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Roster could not be read (I/O)
    SourceUnavailable,
    /// Roster content is malformed or has duplicate ids
    RosterCorrupt,
}

impl QueryErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::SourceUnavailable => "ROSTER_SOURCE_UNAVAILABLE",
            QueryErrorCode::RosterCorrupt => "ROSTER_CORRUPT",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query engine error with its underlying source failure
#[derive(Debug)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
    source: SourceError,
}

impl QueryError {
    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }
}

impl From<SourceError> for QueryError {
    fn from(source: SourceError) -> Self {
        let code = match source {
            SourceError::Io { .. } => QueryErrorCode::SourceUnavailable,
            SourceError::Malformed { .. } | SourceError::DuplicateId(_) => {
                QueryErrorCode::RosterCorrupt
            }
        };
        Self {
            code,
            message: source.to_string(),
            source,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Result type for query engine operations
pub type QueryResult<T> = Result<T, QueryError>;
