//! Command-line interface definition

use clap::{Parser, Subcommand};

use crate::commands::config::ConfigCommands;
use crate::output::OutputFormat;

/// Browse a remote artwork catalog from the terminal
#[derive(Debug, Parser)]
#[command(name = "artcat", version, about, long_about = None)]
pub struct Cli {
    /// API base URL (overrides the configuration file)
    #[arg(long, global = true, env = "ARTCAT_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the paginated collection interactively
    Browse,

    /// Show pre-computed collection statistics
    Stats,

    /// List the heritage-flagged records
    Heritage,

    /// Manage the CLI configuration
    Config(ConfigCommands),
}
