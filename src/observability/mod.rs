//! Observability subsystem for rosterdb
//!
//! - Structured JSON logging on stderr
//! - Typed lifecycle events
//! - Per-call observation scopes
//! - Invocation counters
//!
//! Observability is read-only and never changes a query's outcome.

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;

/// Log a lifecycle event at INFO
pub fn log_event(event: Event) {
    Logger::info(event.as_str(), &[]);
}

/// Log a lifecycle event with fields at INFO
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        log_event(Event::Serving);
        log_event(Event::ShutdownComplete);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::RosterOpened, &[("source", "seed")]);
    }
}
