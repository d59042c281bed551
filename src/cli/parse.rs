//! CLI parse: clap types for wizard-autogen. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate training-wizard example sources and their index pages
#[derive(Parser)]
#[command(name = "wizard-autogen")]
#[command(about = "Assemble example code fragments into rendered sources and index pages")]
pub struct Cli {
    /// Command to run (default: generate)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Docs directory containing the includes tree
    #[arg(long, default_value = ".")]
    pub docs: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log encoding (TEXT, JSON)
    #[arg(long)]
    pub log_encoding: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render every example and write its index page
    Generate,
    /// List discovered examples without writing anything
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}
