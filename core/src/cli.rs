//! Command-line interface for rawc-rs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Run the raw C elementwise ops on JSON-encoded arrays.
#[derive(Parser, Debug)]
#[command(name = "rawc-rs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to optional YAML config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one operation on two arrays.
    Run {
        /// Operation name (add, multiplication). Defaults to `dispatch.default_op`.
        #[arg(short, long)]
        op: Option<String>,

        /// Left operand file (JSON: {"data": [...], "shape": [...]}).
        #[arg(short, long)]
        left: PathBuf,

        /// Right operand file, same format as the left one.
        #[arg(short, long)]
        right: PathBuf,

        /// Output format (json, pretty). Defaults to `output.format`.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List registered operations.
    List,

    /// Run every operation on reference inputs and verify the results.
    Check,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
