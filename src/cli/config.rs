//! Configuration file
//!
//! JSON object; every field is optional:
//!
//! ```json
//! {"roster_path": "students.json", "reference_date": "2025-06-15", "log_level": "info"}
//! ```
//!
//! A relative `roster_path` is resolved against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// rosterdb configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// JSON roster file (optional, default: built-in seed roster)
    #[serde(default)]
    pub roster_path: Option<PathBuf>,

    /// Fixed "today" as YYYY-MM-DD (optional, default: system date)
    #[serde(default)]
    pub reference_date: Option<String>,

    /// Minimum log severity (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roster_path: None,
            reference_date: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        if let Some(roster) = config.roster_path.take() {
            config.roster_path = Some(match path.parent() {
                Some(base) if roster.is_relative() => base.join(roster),
                _ => roster,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from an optional path; no path means defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.reference_date()?;
        self.log_severity()?;
        Ok(())
    }

    /// Parsed reference date, if one is configured
    pub fn reference_date(&self) -> CliResult<Option<NaiveDate>> {
        self.reference_date
            .as_deref()
            .map(|text| {
                NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
                    CliError::config_error(format!(
                        "Invalid reference_date: '{}'. Expected YYYY-MM-DD.",
                        text
                    ))
                })
            })
            .transpose()
    }

    /// Parsed minimum log severity
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level
            .parse()
            .map_err(|e: String| CliError::config_error(format!("Invalid log_level: {}", e)))
    }
}
