//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdb [--config <path>] tools
//! - rosterdb [--config <path>] call <tool> [--args <json>] [--format json|text]
//! - rosterdb [--config <path>] serve

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// rosterdb - read-only query engine over a student roster
#[derive(Parser, Debug)]
#[command(name = "rosterdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tool catalog as JSON
    Tools,

    /// Run a single tool call and exit
    Call {
        /// Tool name, e.g. find_student
        tool: String,

        /// Arguments as a JSON object
        #[arg(long = "args", default_value = "{}")]
        arguments: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },

    /// Answer JSON tool calls from stdin, one per line
    Serve,
}

/// How a one-shot call result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Response envelope as one JSON line
    Json,
    /// Human-readable text
    Text,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call() {
        let cli = Cli::try_parse_from([
            "rosterdb",
            "--config",
            "rosterdb.json",
            "call",
            "born_in_month",
            "--args",
            r#"{"month": 11}"#,
            "--format",
            "text",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("rosterdb.json")));
        match cli.command {
            Command::Call {
                tool,
                arguments,
                format,
            } => {
                assert_eq!(tool, "born_in_month");
                assert_eq!(arguments, r#"{"month": 11}"#);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_call_defaults() {
        let cli = Cli::try_parse_from(["rosterdb", "call", "grouped_by_school"]).unwrap();
        match cli.command {
            Command::Call {
                arguments, format, ..
            } => {
                assert_eq!(arguments, "{}");
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["rosterdb", "serve", "--config", "c.json"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
        assert_eq!(cli.config, Some(PathBuf::from("c.json")));
    }
}
