//! Export of normalized transaction tables as CSV
//!
//! The output uses the canonical column names, ISO dates and plain decimal
//! amounts, so it reads back through the pipeline unchanged.

use std::io::Write;

use crate::error::Result;
use crate::models::Transaction;
use crate::schema::REQUIRED_COLUMNS;

/// Write a table as CSV with the canonical header
pub fn write_table_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(REQUIRED_COLUMNS)?;

    for tx in transactions {
        let date = tx
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let amount = tx.amount.map(|a| a.to_string()).unwrap_or_default();

        wtr.write_record([
            date.as_str(),
            amount.as_str(),
            tx.transaction_type.as_str(),
            tx.transaction_details.as_str(),
            tx.category.as_str(),
            tx.merchant_name.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a table as a CSV string
pub fn table_to_csv_string(transactions: &[Transaction]) -> Result<String> {
    let mut buf = Vec::new();
    write_table_csv(transactions, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
