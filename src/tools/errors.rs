//! Invocation boundary errors
//!
//! Everything except `Query` is a rejection: the call never reached the
//! engine. `Query` carries a roster failure from inside the engine.

use thiserror::Error;

use crate::query::QueryError;

/// Result type for tool invocation
pub type InvocationResult<T> = Result<T, InvocationError>;

/// Failures of a single tool call
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("Malformed call: {0}")]
    MalformedCall(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required argument '{argument}' for {tool}")]
    MissingArgument {
        tool: &'static str,
        argument: &'static str,
    },

    #[error("Invalid argument '{argument}' for {tool}: {reason}")]
    InvalidArgument {
        tool: &'static str,
        argument: String,
        reason: String,
    },

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl InvocationError {
    pub(crate) fn invalid(
        tool: &'static str,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        InvocationError::InvalidArgument {
            tool,
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            InvocationError::MalformedCall(_) => "ROSTER_MALFORMED_CALL",
            InvocationError::UnknownTool(_) => "ROSTER_UNKNOWN_TOOL",
            InvocationError::MissingArgument { .. } => "ROSTER_MISSING_ARGUMENT",
            InvocationError::InvalidArgument { .. } => "ROSTER_INVALID_ARGUMENT",
            InvocationError::Query(e) => e.code().code(),
        }
    }

    /// Returns true if the call was refused before reaching the engine
    pub fn is_rejection(&self) -> bool {
        !matches!(self, InvocationError::Query(_))
    }
}
