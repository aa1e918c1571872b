//! Header validation for transaction CSV files
//!
//! Column labels are matched after trimming whitespace and lowercasing, so
//! `" Date"`, `"DATE"` and `"date"` are the same column. Extra columns are
//! ignored. When two labels normalize to the same name the first one wins.

use csv::StringRecord;

use crate::error::{Error, Result};

/// Required columns, in the order they are reported when missing
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "amount",
    "transaction type",
    "transaction details",
    "category",
    "merchant name",
];

/// Position of each required column in the source header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub amount: usize,
    pub transaction_type: usize,
    pub transaction_details: usize,
    pub category: usize,
    pub merchant_name: usize,
}

/// Normalize a header label for comparison
pub fn normalize_label(label: &str) -> String {
    label.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Validate a header row and map required columns to their indices.
///
/// Fails with [`Error::Schema`] listing every missing column, not just the first.
pub fn validate_headers(headers: &StringRecord) -> Result<ColumnMap> {
    let labels: Vec<String> = headers.iter().map(normalize_label).collect();
    let position = |name: &str| labels.iter().position(|l| l == name);

    let mut found = [0usize; REQUIRED_COLUMNS.len()];
    let mut missing = Vec::new();
    for (slot, name) in found.iter_mut().zip(REQUIRED_COLUMNS) {
        match position(name) {
            Some(idx) => *slot = idx,
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(Error::Schema { missing });
    }

    let [date, amount, transaction_type, transaction_details, category, merchant_name] = found;
    Ok(ColumnMap {
        date,
        amount,
        transaction_type,
        transaction_details,
        category,
        merchant_name,
    })
}
