//! CLI module for rosterdb
//!
//! Provides command-line interface for:
//! - tools: print the tool catalog
//! - call: one-shot tool call
//! - serve: JSON-lines serving loop over stdin/stdout

mod args;
mod boot;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, OutputFormat};
pub use boot::{boot, ConfiguredClock, ConfiguredInvoker, RosterSource};
pub use commands::{call, run, run_command, serve, tools};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_lines, write_json, write_text, InputLine};
