//! CLI argument definitions using clap
//!
//! Commands:
//! - footnotes session [--config <path>]
//! - footnotes check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// footnotes - ordered, renumbering footnote collection
#[derive(Parser, Debug)]
#[command(name = "footnotes")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read JSON requests from stdin, one per line, against a fresh collection
    Session {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./footnotes.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
