//! Category and income/expense aggregation
//!
//! A transaction with no amount still belongs to its category (it is counted)
//! but adds exactly 0.0 to every sum.

use std::collections::BTreeMap;

use crate::models::{CategoryTotal, CategoryTotals, Transaction};

/// Income, expense and net position of a classified table
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub total_income: f64,
    /// Negative (or zero)
    pub total_expense: f64,
    pub net: f64,
}

/// Sum amounts per category, ascending by total
pub fn category_totals(transactions: &[Transaction]) -> CategoryTotals {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for tx in transactions {
        let entry = groups.entry(tx.category.as_str()).or_insert((0.0, 0));
        entry.0 += tx.amount_or_zero();
        entry.1 += 1;
    }

    CategoryTotals::from_entries(
        groups
            .into_iter()
            .map(|(category, (amount, transaction_count))| CategoryTotal {
                category: category.to_string(),
                amount,
                transaction_count,
            })
            .collect(),
    )
}

/// Compute income, expense and net from classification flags
pub fn totals(transactions: &[Transaction]) -> Totals {
    let total_income: f64 = transactions
        .iter()
        .filter(|tx| tx.is_income)
        .map(Transaction::amount_or_zero)
        .sum();
    let total_expense: f64 = transactions
        .iter()
        .filter(|tx| tx.is_expense)
        .map(Transaction::amount_or_zero)
        .sum();

    Totals {
        total_income,
        total_expense,
        net: total_income + total_expense,
    }
}
