//! Shared command setup
//!
//! This module contains:
//! - `resolve_config` - Build the report config from flags, env and config file
//! - `with_policy` - Apply a `--policy` override

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::{default_config_path, NormalizationPolicy, ReportConfig};
use tracing::debug;

/// Data directory used when nothing else is configured
pub const DEFAULT_DATA_DIR: &str = "transactions";

/// Resolve configuration.
///
/// Priority for the data directory: `--data-dir` > TALLY_DATA_DIR > config file
/// (`--config`, else the default path if it exists) > ./transactions
pub fn resolve_config(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<ReportConfig> {
    let config = match config_path {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => ReportConfig::load(&path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ReportConfig::new(DEFAULT_DATA_DIR),
        },
    };

    let mut config = config
        .apply_env()
        .context("Invalid TALLY_* environment override")?;

    if let Some(dir) = data_dir {
        config.data_dir = dir.to_path_buf();
    }

    debug!(
        "Data directory: {} (*.{}, {} policy)",
        config.data_dir.display(),
        config.extension,
        config.policy
    );
    Ok(config)
}

/// Apply a `--policy` flag on top of the resolved config
pub fn with_policy(config: ReportConfig, policy: Option<&str>) -> Result<ReportConfig> {
    match policy {
        Some(p) => {
            let policy: NormalizationPolicy = p.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Ok(config.with_policy(policy))
        }
        None => Ok(config),
    }
}
