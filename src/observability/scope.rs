//! Per-call observation scope
//!
//! - Logs `TOOL_CALL_BEGIN` on creation
//! - Logs `TOOL_CALL_COMPLETE`, `TOOL_CALL_REJECTED` or `TOOL_CALL_FAILED`
//!   when finished, with the elapsed time
//! - Warns on drop if never finished

use std::time::Instant;

use super::events::Event;
use super::logger::{Logger, Severity};

/// Brackets one tool call with begin/end log lines
pub struct ObservationScope {
    fields: Vec<(&'static str, String)>,
    started: Instant,
    finished: bool,
}

impl ObservationScope {
    /// Opens a scope carrying the given fields on every line it logs
    pub fn begin(fields: &[(&'static str, &str)]) -> Self {
        let scope = Self {
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
            started: Instant::now(),
            finished: false,
        };
        scope.emit(Severity::Trace, Event::ToolCallBegin, &[]);
        scope
    }

    /// Call answered
    pub fn complete(mut self, extra: &[(&str, &str)]) {
        self.finish(Severity::Info, Event::ToolCallComplete, extra);
    }

    /// Call refused before reaching the engine
    pub fn reject(mut self, code: &str, reason: &str) {
        self.finish(
            Severity::Warn,
            Event::ToolCallRejected,
            &[("code", code), ("reason", reason)],
        );
    }

    /// Call failed inside the engine
    pub fn fail(mut self, code: &str, reason: &str) {
        self.finish(
            Severity::Error,
            Event::ToolCallFailed,
            &[("code", code), ("reason", reason)],
        );
    }

    /// Microseconds since the scope opened
    pub fn elapsed_us(&self) -> u128 {
        self.started.elapsed().as_micros()
    }

    /// Returns true once the scope has been finished
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self, severity: Severity, event: Event, extra: &[(&str, &str)]) {
        self.finished = true;
        let elapsed = self.elapsed_us().to_string();
        let mut fields: Vec<(&str, &str)> = vec![("elapsed_us", elapsed.as_str())];
        fields.extend_from_slice(extra);
        self.emit(severity, event, &fields);
    }

    fn emit(&self, severity: Severity, event: Event, extra: &[(&str, &str)]) {
        if !Logger::enabled(severity) {
            return;
        }
        let mut fields: Vec<(&str, &str)> =
            self.fields.iter().map(|(k, v)| (*k, v.as_str())).collect();
        fields.extend_from_slice(extra);
        Logger::log(severity, event.as_str(), &fields);
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            self.emit(
                Severity::Warn,
                Event::ToolCallFailed,
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}
