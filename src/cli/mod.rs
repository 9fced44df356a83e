//! CLI module
//!
//! Provides command-line interface for:
//! - session: Serve JSON requests against an in-memory collection
//! - check-config: Validate a configuration file

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod session;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, session};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{error_envelope, ok_envelope, read_lines, write_error, write_json, write_response};
pub use session::{Request, Session};
