//! CLI command implementations
//!
//! Each command loads configuration, boots the invoker and then either runs
//! one call or serves calls until stdin closes. Responses go to stdout;
//! logs go to stderr.

use std::io::{self, BufRead, Write};

use serde_json::{Map, Value};

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::query::Clock;
use crate::roster::RecordSource;
use crate::tools::{
    catalog, error_envelope, invocation_error_envelope, render_text, success_envelope,
    InvocationError, Invoker, ToolCall,
};

use super::args::{Command, OutputFormat};
use super::boot::boot;
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_lines, write_json, write_text, InputLine};

/// Parse arguments and run
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let config = Config::load_or_default(cli.config.as_deref())?;
    run_command(&config, cli.command)
}

/// Dispatch a parsed command
pub fn run_command(config: &Config, cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Tools => tools(&mut io::stdout().lock()),
        Command::Call {
            tool,
            arguments,
            format,
        } => {
            let invoker = boot(config)?;
            call(&invoker, &tool, &arguments, format, &mut io::stdout().lock())
        }
        Command::Serve => {
            let invoker = boot(config)?;
            serve(&invoker, io::stdin().lock(), &mut io::stdout().lock())
        }
    }
}

/// Print the tool catalog
pub fn tools<W: Write>(out: &mut W) -> CliResult<()> {
    write_json(out, &serde_json::to_value(catalog())?)
}

/// Run one call. The response is written even when the call fails.
pub fn call<S, C, W>(
    invoker: &Invoker<S, C>,
    tool: &str,
    arguments: &str,
    format: OutputFormat,
    out: &mut W,
) -> CliResult<()>
where
    S: RecordSource,
    C: Clock,
    W: Write,
{
    let call = ToolCall {
        tool: tool.to_string(),
        arguments: parse_arguments(arguments)?,
    };

    match invoker.invoke(&call) {
        Ok(invocation) => match format {
            OutputFormat::Json => write_json(out, &success_envelope(&invocation)),
            OutputFormat::Text => write_text(out, &render_text(&invocation.output)),
        },
        Err(err) => {
            match format {
                OutputFormat::Json => write_json(out, &invocation_error_envelope(&err))?,
                OutputFormat::Text => write_text(out, &format!("error: {}", err))?,
            }
            Err(err.into())
        }
    }
}

/// Serving loop: one call per input line, one response per output line.
///
/// Malformed, non-UTF-8 or rejected calls get an error response and the loop
/// goes on. A read failure on the input is answered with an error response
/// and ends the loop with that error.
pub fn serve<S, C, R, W>(invoker: &Invoker<S, C>, input: R, out: &mut W) -> CliResult<()>
where
    S: RecordSource,
    C: Clock,
    R: BufRead,
    W: Write,
{
    log_event(Event::Serving);

    let mut outcome = Ok(());
    for line in read_lines(input) {
        let response = match line {
            Ok(InputLine::Text(text)) => match ToolCall::parse(&text) {
                Ok(call) => match invoker.invoke(&call) {
                    Ok(invocation) => success_envelope(&invocation),
                    Err(err) => invocation_error_envelope(&err),
                },
                Err(err) => invocation_error_envelope(&err),
            },
            Ok(InputLine::NotUtf8) => invocation_error_envelope(&InvocationError::MalformedCall(
                "line is not valid UTF-8".into(),
            )),
            Err(e) => {
                write_json(out, &error_envelope(e.code_str(), e.message()))?;
                outcome = Err(e);
                break;
            }
        };
        write_json(out, &response)?;
    }

    let summary = invoker.metrics().to_fields();
    let fields: Vec<(&str, &str)> = summary.iter().map(|(k, v)| (*k, v.as_str())).collect();
    log_event_with_fields(Event::ShutdownComplete, &fields);
    outcome
}

fn parse_arguments(text: &str) -> CliResult<Map<String, Value>> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(InvocationError::MalformedCall("--args must be a JSON object".into()).into()),
        Err(e) => Err(InvocationError::MalformedCall(format!("--args: {}", e)).into()),
    }
}
