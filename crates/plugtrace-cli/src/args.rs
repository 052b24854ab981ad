use crate::types::{GroupingArg, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plugtrace")]
#[command(about = "Rebuild call trees from plugin trace logs and compose fetch queries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory holding config.toml (defaults to PLUGTRACE_PATH or the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the call tree and timeline for one fetched page of trace rows
    Timeline {
        /// JSON file: a bare array of rows or an OData `{"value": [...]}` envelope
        file: PathBuf,

        #[arg(long)]
        group_by: Option<GroupingArg>,

        /// Drop rows that fail validation instead of aborting
        #[arg(long)]
        skip_invalid: bool,
    },

    /// Compose the query parameters for fetching trace rows
    Query {
        /// Filter definition in .json or .toml
        #[arg(long)]
        filter: Option<PathBuf>,

        #[arg(long)]
        top: Option<usize>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml into the workspace
    Init {
        #[arg(long)]
        force: bool,
    },
}
