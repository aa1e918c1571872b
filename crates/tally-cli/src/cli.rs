//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Summarize a transaction CSV by category
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Income, expense and category report for transaction CSV files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing transaction CSV files
    ///
    /// Overrides TALLY_DATA_DIR and the config file. Defaults to ./transactions.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to ~/.config/tally/config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List transaction files in the data directory
    Files,

    /// Show the report for one file
    Report {
        /// File name inside the data directory (e.g. march.csv)
        #[arg(short, long)]
        file: String,

        /// Row policy for unparseable dates/amounts: lenient, strict
        #[arg(long)]
        policy: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Maximum transactions to show in the table (0 = all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Export the normalized, date-sorted table as CSV
    Export {
        /// File name inside the data directory
        #[arg(short, long)]
        file: String,

        /// Row policy for unparseable dates/amounts: lenient, strict
        #[arg(long)]
        policy: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
