//! Tally CLI - transaction CSV reports
//!
//! Usage:
//!   tally files                       List transaction files
//!   tally report --file march.csv     Show totals, category chart and table
//!   tally export --file march.csv     Write the normalized table as CSV

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let config = commands::resolve_config(cli.data_dir.as_deref(), cli.config.as_deref())?;

    match cli.command {
        Commands::Files => commands::cmd_files(&config),
        Commands::Report {
            file,
            policy,
            json,
            limit,
        } => {
            let config = commands::with_policy(config, policy.as_deref())?;
            commands::cmd_report(&config, &file, json, limit)
        }
        Commands::Export {
            file,
            policy,
            output,
        } => {
            let config = commands::with_policy(config, policy.as_deref())?;
            commands::cmd_export(&config, &file, output.as_deref())
        }
    }
}
