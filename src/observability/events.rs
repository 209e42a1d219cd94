//! Observable lifecycle events for rosterdb

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Record source opened
    RosterOpened,
    /// Serving loop ready for calls
    Serving,
    /// Serving loop finished
    ShutdownComplete,
    /// Tool call received
    ToolCallBegin,
    /// Tool call answered
    ToolCallComplete,
    /// Tool call rejected at the boundary
    ToolCallRejected,
    /// Tool call failed while reading the roster
    ToolCallFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RosterOpened => "ROSTER_OPENED",
            Event::Serving => "ROSTERDB_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ToolCallBegin => "TOOL_CALL_BEGIN",
            Event::ToolCallComplete => "TOOL_CALL_COMPLETE",
            Event::ToolCallRejected => "TOOL_CALL_REJECTED",
            Event::ToolCallFailed => "TOOL_CALL_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
