//! Tally Core Library
//!
//! Turns a transaction CSV into a category report:
//! - Header validation against the fixed transaction schema
//! - Date/amount normalization with an explicit lenient or strict policy
//! - Chronological sorting and income/expense classification
//! - Per-category aggregation and report assembly
//! - Data directory discovery and explicit configuration
//! - CSV export of normalized tables

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod schema;
pub mod sort;
pub mod store;

pub use config::{default_config_path, ReportConfig};
pub use error::{Error, Result};
pub use models::{
    BarTone, CategoryTotal, CategoryTotals, ChartBar, NormalizationPolicy, Report, Transaction,
    UNCATEGORIZED,
};
pub use pipeline::{build_report, read_table, ReportPipeline};
pub use store::FileStore;
