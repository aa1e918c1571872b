//! Export command implementation

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{export::write_table_csv, ReportConfig, ReportPipeline};
use tracing::info;

pub fn cmd_export(config: &ReportConfig, file: &str, output: Option<&Path>) -> Result<()> {
    let pipeline = ReportPipeline::new(config.clone());
    let table = pipeline
        .load_table(file)
        .with_context(|| format!("Failed to load {}", file))?;

    match output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create file: {}", path.display()))?;
            write_table_csv(&table, BufWriter::new(out))?;
            info!("Exported {} transactions to {}", table.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            write_table_csv(&table, stdout.lock())?;
        }
    }

    Ok(())
}
