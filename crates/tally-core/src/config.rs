//! Report configuration
//!
//! The data directory is always explicit: it is a required argument of
//! [`ReportConfig::new`] and a required key in the config file.
//!
//! ## Resolution
//!
//! 1. A TOML file (`--config`, or [`default_config_path`] when present)
//! 2. Environment overrides: `TALLY_DATA_DIR`, `TALLY_POLICY`
//!
//! ```toml
//! data_dir = "/srv/tally/transactions"
//! extension = "csv"
//! policy = "lenient"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::NormalizationPolicy;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TALLY_DATA_DIR";
/// Environment variable overriding the normalization policy
pub const POLICY_ENV: &str = "TALLY_POLICY";

const DEFAULT_EXTENSION: &str = "csv";

/// Configuration for one pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Directory holding the transaction files
    pub data_dir: PathBuf,
    /// File extension (without the dot) used when listing files
    pub extension: String,
    pub policy: NormalizationPolicy,
}

/// On-disk shape of the config file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: PathBuf,
    extension: Option<String>,
    policy: Option<NormalizationPolicy>,
}

impl ReportConfig {
    /// Create a config for `data_dir` with default extension and policy
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            policy: NormalizationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: NormalizationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Parse a TOML config document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;

        let mut config = Self::new(file.data_dir);
        if let Some(ext) = file.extension {
            config = config.with_extension(ext);
        }
        if let Some(policy) = file.policy {
            config.policy = policy;
        }

        if config.extension.is_empty() {
            return Err(Error::Config("extension must not be empty".into()));
        }
        Ok(config)
    }

    /// Load a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        debug!("Loaded config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Apply `TALLY_DATA_DIR` / `TALLY_POLICY` overrides from the environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(
            std::env::var(DATA_DIR_ENV).ok(),
            std::env::var(POLICY_ENV).ok(),
        )
    }

    fn apply_overrides(mut self, data_dir: Option<String>, policy: Option<String>) -> Result<Self> {
        if let Some(dir) = data_dir.filter(|s| !s.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(policy) = policy.filter(|s| !s.trim().is_empty()) {
            self.policy = policy.parse().map_err(Error::InvalidData)?;
        }
        Ok(self)
    }
}

/// Default config file location (~/.config/tally/config.toml on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tally").join("config.toml"))
}
