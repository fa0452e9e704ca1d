//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use screenkit::build_info;
use std::path::PathBuf;

/// Terminal output helpers with a screen text cache.
#[derive(Debug, Parser)]
#[command(
    name = "screenkit",
    version,
    long_version = build_info::LONG_VERSION,
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to config file (default: ./screenkit.toml or ~/.config/screenkit/screenkit.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Show `[DEBUG]` lines.
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    /// Clear the screen with the system command instead of an escape sequence.
    #[arg(long = "slow-clear", global = true)]
    pub slow_clear: bool,

    /// Append tracing output to this file.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Walk through titles, reprinting, and validated prompts (default).
    Demo,
    /// Print each text, then list what the screen cache holds.
    Echo {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Print the name of each key pressed until Escape or Ctrl+C.
    Keys,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Demo)
    }
}
