//! Data directory listing

use anyhow::{Context, Result};
use tally_core::{ReportConfig, ReportPipeline};

pub fn cmd_files(config: &ReportConfig) -> Result<()> {
    let pipeline = ReportPipeline::new(config.clone());
    let files = pipeline
        .list_files()
        .with_context(|| format!("Failed to list {}", config.data_dir.display()))?;

    if files.is_empty() {
        println!(
            "No .{} files found in {}",
            config.extension,
            config.data_dir.display()
        );
        return Ok(());
    }

    println!();
    println!("📂 Transaction files in {}", config.data_dir.display());
    println!("   ─────────────────────────────────────────────────────────────");
    for name in &files {
        println!("   {}", name);
    }
    println!();
    println!("   Run 'tally report --file <name>' to see a report.");

    Ok(())
}
