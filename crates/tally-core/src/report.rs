//! Report assembly
//!
//! Packages a classified table and its aggregates into one [`Report`] for the
//! presentation layer.

use crate::aggregate::{category_totals, totals};
use crate::models::{BarTone, ChartBar, Report, Transaction};

/// Assemble a report from a sorted, classified table
pub fn assemble(source: impl Into<String>, transactions: Vec<Transaction>) -> Report {
    let totals = totals(&transactions);
    let category_totals = category_totals(&transactions);
    let expense_category_totals = category_totals.expenses_only();

    Report {
        source: source.into(),
        total_income: totals.total_income,
        total_expense: totals.total_expense,
        net: totals.net,
        transactions,
        category_totals,
        expense_category_totals,
    }
}

impl Report {
    /// One bar per category, in category-totals order.
    ///
    /// Positive totals are income bars; zero and negative totals are expense bars.
    pub fn chart_series(&self) -> Vec<ChartBar> {
        self.category_totals
            .iter()
            .map(|t| ChartBar {
                category: t.category.clone(),
                amount: t.amount,
                tone: if t.amount > 0.0 {
                    BarTone::Income
                } else {
                    BarTone::Expense
                },
            })
            .collect()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
