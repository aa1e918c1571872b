//! Chronological ordering of normalized transactions

use crate::models::Transaction;

/// Sort transactions ascending by date.
///
/// The sort is stable: rows sharing a date keep their input order. Rows without
/// a date go after every dated row, also in input order.
pub fn sort_by_date(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by_key(|tx| (tx.date.is_none(), tx.date));
    transactions
}
