//! CLI command implementations

use std::path::Path;

use serde_json::json;

use crate::observability::{log_event, log_event_with_fields, Event, Logger};

use super::args::Command;
use super::config::Config;
use super::errors::CliResult;
use super::io::{read_lines, write_error, write_json, write_response};
use super::session::Session;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Session { config } => session(config.as_deref()),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Serve requests from stdin until end of input
///
/// Malformed or failing requests produce an error envelope and the session
/// continues. A read error on stdin ends the session.
pub fn session(config_path: Option<&Path>) -> CliResult<()> {
    let config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    Logger::set_min_severity(config.severity()?);

    log_event(Event::SessionBegin);
    let mut session = Session::new(config);
    let mut handled = 0usize;

    for line in read_lines() {
        match line {
            Ok(line) => {
                let response = session.handle_line(&line);
                write_json(&response)?;
                handled += 1;
            }
            Err(e) => {
                write_error(e.code_str(), e.message())?;
                break;
            }
        }
    }

    log_event_with_fields(
        Event::SessionComplete,
        &[
            ("requests", &handled.to_string()),
            ("footnotes", &session.footnotes().count().to_string()),
        ],
    );
    Ok(())
}

/// Validate a configuration file and print the effective settings
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    write_response(json!({
        "valid": true,
        "config": serde_json::to_value(&config)?,
    }))
}
