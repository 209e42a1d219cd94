//! CLI error types
//!
//! Every CLI failure maps to one stable code, printed before the message on
//! stderr when the process exits non-zero.

use std::io;

use thiserror::Error;

use crate::tools::InvocationError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file missing, unreadable or invalid
    ConfigError,
    /// stdin/stdout failure
    IoError,
    /// Roster could not be opened at startup
    RosterError,
    /// A one-shot call was rejected or failed
    CallFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ROSTER_CLI_CONFIG_ERROR",
            Self::IoError => "ROSTER_CLI_IO_ERROR",
            Self::RosterError => "ROSTER_CLI_ROSTER_ERROR",
            Self::CallFailed => "ROSTER_CLI_CALL_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("ROSTER_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    #[error("ROSTER_CLI_IO_ERROR: {0}")]
    Io(String),

    #[error("ROSTER_CLI_ROSTER_ERROR: {0}")]
    Roster(String),

    /// Carries the invocation code ahead of its message
    #[error("ROSTER_CLI_CALL_FAILED: {0}")]
    CallFailed(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        CliError::Io(msg.into())
    }

    pub fn roster_error(msg: impl Into<String>) -> Self {
        CliError::Roster(msg.into())
    }

    pub fn code(&self) -> CliErrorCode {
        match self {
            CliError::Config(_) => CliErrorCode::ConfigError,
            CliError::Io(_) => CliErrorCode::IoError,
            CliError::Roster(_) => CliErrorCode::RosterError,
            CliError::CallFailed(_) => CliErrorCode::CallFailed,
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code().code()
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::Config(msg)
            | CliError::Io(msg)
            | CliError::Roster(msg)
            | CliError::CallFailed(msg) => msg,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<InvocationError> for CliError {
    fn from(e: InvocationError) -> Self {
        CliError::CallFailed(format!("{}: {}", e.code(), e))
    }
}

pub type CliResult<T> = Result<T, CliError>;
