//! Income/expense classification by amount sign

use crate::models::Transaction;

/// Flag each transaction as income (`amount > 0`) or expense (`amount < 0`).
///
/// Zero and missing amounts are neither.
pub fn classify(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    for tx in &mut transactions {
        tx.is_income = matches!(tx.amount, Some(a) if a > 0.0);
        tx.is_expense = matches!(tx.amount, Some(a) if a < 0.0);
    }
    transactions
}
