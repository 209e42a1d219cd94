//! Startup: turn a validated config into a ready invoker
//!
//! The roster is read once at startup so a broken roster fails the process
//! before any call is accepted. File rosters are still re-read per call.

use chrono::NaiveDate;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::query::{Clock, FixedClock, QueryEngine, SystemClock};
use crate::roster::{
    seed_roster, InMemorySource, JsonFileSource, RecordSource, Snapshot, SourceResult,
};
use crate::tools::Invoker;

use super::config::Config;
use super::errors::{CliError, CliResult};

/// The record source selected by configuration
#[derive(Debug, Clone)]
pub enum RosterSource {
    /// Built-in seed roster
    Seed(InMemorySource),
    /// JSON roster file
    File(JsonFileSource),
}

impl RosterSource {
    /// Short description for logs
    pub fn describe(&self) -> String {
        match self {
            RosterSource::Seed(_) => "seed".to_string(),
            RosterSource::File(file) => file.path().display().to_string(),
        }
    }
}

impl RecordSource for RosterSource {
    fn snapshot(&self) -> SourceResult<Snapshot> {
        match self {
            RosterSource::Seed(source) => source.snapshot(),
            RosterSource::File(source) => source.snapshot(),
        }
    }
}

/// The clock selected by configuration
#[derive(Debug, Clone, Copy)]
pub enum ConfiguredClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl ConfiguredClock {
    fn from_reference(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => ConfiguredClock::Fixed(FixedClock(date)),
            None => ConfiguredClock::System(SystemClock),
        }
    }
}

impl Clock for ConfiguredClock {
    fn today(&self) -> NaiveDate {
        match self {
            ConfiguredClock::System(clock) => clock.today(),
            ConfiguredClock::Fixed(clock) => clock.today(),
        }
    }
}

/// Invoker wired from configuration
pub type ConfiguredInvoker = Invoker<RosterSource, ConfiguredClock>;

/// Applies logging settings, opens the roster and builds the invoker
pub fn boot(config: &Config) -> CliResult<ConfiguredInvoker> {
    Logger::set_min_severity(config.log_severity()?);

    let reference_date = config.reference_date()?;
    let reference_text = reference_date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "system".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("reference_date", reference_text.as_str())]);

    let source = open_roster(config)?;
    let students = source
        .snapshot()
        .map_err(|e| CliError::roster_error(e.to_string()))?
        .len()
        .to_string();
    log_event_with_fields(
        Event::RosterOpened,
        &[("source", source.describe().as_str()), ("students", students.as_str())],
    );

    let clock = ConfiguredClock::from_reference(reference_date);
    Ok(Invoker::new(QueryEngine::with_clock(source, clock)))
}

fn open_roster(config: &Config) -> CliResult<RosterSource> {
    match &config.roster_path {
        Some(path) => Ok(RosterSource::File(JsonFileSource::new(path.clone()))),
        None => seed_roster()
            .map(RosterSource::Seed)
            .map_err(|e| CliError::roster_error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::seed::SEED_SIZE;
    use crate::tools::ToolCall;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_boot_with_defaults_uses_seed() {
        let invoker = boot(&Config::default()).unwrap();
        let snapshot = invoker.engine().source().snapshot().unwrap();
        assert_eq!(snapshot.len(), SEED_SIZE);
        assert!(matches!(invoker.engine().source(), RosterSource::Seed(_)));
    }

    #[test]
    fn test_boot_with_reference_date() {
        let config = Config {
            reference_date: Some("2025-06-15".to_string()),
            ..Config::default()
        };
        let invoker = boot(&config).unwrap();
        assert_eq!(
            invoker.engine().clock().today(),
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_boot_fails_on_missing_roster() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            roster_path: Some(dir.path().join("absent.json")),
            ..Config::default()
        };
        let err = boot(&config).err().unwrap();
        assert_eq!(err.code_str(), "ROSTER_CLI_ROSTER_ERROR");
    }

    #[test]
    fn test_boot_with_file_roster() {
        let dir = TempDir::new().unwrap();
        let roster = dir.path().join("students.json");
        fs::write(
            &roster,
            r#"[{"id": 1, "firstName": "Kim", "lastName": "Ash", "school": "Mining"}]"#,
        )
        .unwrap();

        let config = Config {
            roster_path: Some(roster),
            ..Config::default()
        };
        let invoker = boot(&config).unwrap();
        let call = ToolCall::new("find_student")
            .arg("firstName", "Kim")
            .arg("lastName", "Ash");
        assert!(!invoker.invoke(&call).unwrap().output.is_absent());
    }
}
