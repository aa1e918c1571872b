//! Domain models for Tally

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category assigned to rows whose category cell is empty
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single normalized transaction row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// None when the source value could not be parsed as a date
    pub date: Option<NaiveDate>,
    /// Negative = expense, positive = income. None when unparseable.
    pub amount: Option<f64>,
    pub transaction_type: String,
    pub transaction_details: String,
    pub category: String,
    pub merchant_name: String,
    pub is_income: bool,
    pub is_expense: bool,
}

impl Transaction {
    /// Amount used in sums: a missing amount counts as zero
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// What to do with rows whose date or amount cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationPolicy {
    /// Keep the row with a missing date/amount
    #[default]
    Lenient,
    /// Drop the row
    Strict,
}

impl NormalizationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl std::str::FromStr for NormalizationPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            _ => Err(format!(
                "Unknown normalization policy: {} (valid: lenient, strict)",
                s
            )),
        }
    }
}

impl std::fmt::Display for NormalizationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Summed amount for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub transaction_count: usize,
}

/// Per-category totals, ascending by amount
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTotals(Vec<CategoryTotal>);

impl CategoryTotals {
    /// Build from entries, sorting ascending by amount (ties by category name)
    pub fn from_entries(mut entries: Vec<CategoryTotal>) -> Self {
        entries.sort_by(|a, b| {
            a.amount
                .total_cmp(&b.amount)
                .then_with(|| a.category.cmp(&b.category))
        });
        Self(entries)
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.amount)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum over every category
    pub fn sum(&self) -> f64 {
        self.0.iter().map(|t| t.amount).sum()
    }

    /// Only the categories with a negative total, still ascending
    pub fn expenses_only(&self) -> Self {
        Self(self.0.iter().filter(|t| t.amount < 0.0).cloned().collect())
    }

    pub fn categories(&self) -> Vec<&str> {
        self.0.iter().map(|t| t.category.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Bar color class for the category chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarTone {
    /// Positive total (drawn green)
    Income,
    /// Zero or negative total (drawn red)
    Expense,
}

/// One bar of the per-category chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub category: String,
    pub amount: f64,
    pub tone: BarTone,
}

/// Fully assembled result of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// File identifier the report was built from
    pub source: String,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    /// Sorted, classified rows
    pub transactions: Vec<Transaction>,
    /// Totals for every category (chart data)
    pub category_totals: CategoryTotals,
    /// Subset of `category_totals` with a negative total
    pub expense_category_totals: CategoryTotals,
}
