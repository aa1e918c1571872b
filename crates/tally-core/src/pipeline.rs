//! Report pipeline entry point
//!
//! raw CSV → validated → normalized → sorted → classified → aggregated → report.
//! Each run is independent and synchronous; any structural failure aborts it.

use std::io::Read;

use csv::ReaderBuilder;
use tracing::{debug, info};

use crate::classify::classify;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::models::{NormalizationPolicy, Report, Transaction};
use crate::normalize::normalize_records;
use crate::report::assemble;
use crate::schema::validate_headers;
use crate::sort::sort_by_date;
use crate::store::FileStore;

/// Read, validate, normalize and sort a transaction CSV
pub fn read_table<R: Read>(reader: R, policy: NormalizationPolicy) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = validate_headers(&headers)?;

    let records = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;
    debug!("Read {} CSV records", records.len());

    let transactions = normalize_records(&records, &columns, policy);
    Ok(sort_by_date(transactions))
}

/// Build a report from any reader, labelling it with `source`
pub fn build_report<R: Read>(
    source: &str,
    reader: R,
    policy: NormalizationPolicy,
) -> Result<Report> {
    let table = classify(read_table(reader, policy)?);
    let report = assemble(source, table);

    info!(
        "Report for {}: {} transactions, {} categories, net {:.2}",
        report.source,
        report.transaction_count(),
        report.category_totals.len(),
        report.net
    );
    Ok(report)
}

/// Pipeline bound to one explicit configuration
#[derive(Debug, Clone)]
pub struct ReportPipeline {
    config: ReportConfig,
    store: FileStore,
}

impl ReportPipeline {
    pub fn new(config: ReportConfig) -> Self {
        let store = FileStore::new(&config.data_dir, &config.extension);
        Self { config, store }
    }

    /// Transaction files available for reporting
    pub fn list_files(&self) -> Result<Vec<String>> {
        self.store.list_files()
    }

    /// Load a file as a normalized, date-sorted table (no classification)
    pub fn load_table(&self, file_id: &str) -> Result<Vec<Transaction>> {
        let file = self.store.open(file_id)?;
        debug!("Loading {} ({} policy)", file_id, self.config.policy);
        read_table(file, self.config.policy)
    }

    /// Run the full pipeline for one file
    pub fn run(&self, file_id: &str) -> Result<Report> {
        let file = self.store.open(file_id)?;
        debug!("Building report for {} ({} policy)", file_id, self.config.policy);
        build_report(file_id, file, self.config.policy)
    }

    /// Run the full pipeline over an in-memory or streamed source
    pub fn run_reader<R: Read>(&self, source: &str, reader: R) -> Result<Report> {
        build_report(source, reader, self.config.policy)
    }
}
