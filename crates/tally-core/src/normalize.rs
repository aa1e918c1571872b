//! Field normalization: typed dates and amounts, text defaults
//!
//! Value-level problems never fail the run. A date or amount that cannot be
//! parsed becomes `None`; under [`NormalizationPolicy::Strict`] such rows are
//! dropped instead.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use regex::Regex;
use tracing::debug;

use crate::models::{NormalizationPolicy, Transaction, UNCATEGORIZED};
use crate::schema::ColumnMap;

/// How ambiguous numeric dates like `01/02/2024` are read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// 01/02/2024 is 1 February
    DayFirst,
    /// 01/02/2024 is 2 January
    MonthFirst,
}

// Two-digit-year formats come first: `%Y` would happily read "24" as year 24.
const DAY_FIRST_FORMATS: &[&str] = &[
    "%d/%m/%y", // 15/01/24
    "%d/%m/%Y", // 15/01/2024
    "%d-%m-%y", // 15-01-24
    "%d-%m-%Y", // 15-01-2024
    "%d.%m.%y", // 15.01.24
    "%d.%m.%Y", // 15.01.2024
    "%d %B %y", // 15 Jan 24
    "%d %B %Y", // 15 Jan 2024, 15 January 2024
];

const MONTH_FIRST_FORMATS: &[&str] = &[
    "%m/%d/%y",  // 01/15/24
    "%m/%d/%Y",  // 01/15/2024
    "%m-%d-%y",  // 01-15-24
    "%m-%d-%Y",  // 01-15-2024
    "%B %d %y",  // Jan 15 24
    "%B %d %Y",  // Jan 15 2024
    "%B %d, %y", // Jan 15, 24
    "%B %d, %Y", // Jan 15, 2024
];

// Anything earlier is a short year that slipped through `%Y`.
const MIN_YEAR: i32 = 100;

// Year-first values read the same in either order. Only tried when the value
// starts with a four-digit year, since `%Y` also accepts short years.
const ISO_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const ISO_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

fn starts_with_year(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() > 4
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && matches!(bytes[4], b'-' | b'/')
}

/// Parse a single date value under the given interpretation
pub fn parse_date(s: &str, order: DateOrder) -> Option<NaiveDate> {
    parse_date_any_year(s, order).filter(|d| d.year() >= MIN_YEAR)
}

fn parse_date_any_year(s: &str, order: DateOrder) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if starts_with_year(s) {
        return ISO_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| {
                ISO_DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            });
    }

    let formats = match order {
        DateOrder::DayFirst => DAY_FIRST_FORMATS,
        DateOrder::MonthFirst => MONTH_FIRST_FORMATS,
    };

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Pick the interpretation for a whole date column.
///
/// Day-first is preferred. The column only switches to month-first when
/// day-first fails systemically, i.e. month-first reads strictly more values.
pub fn detect_date_order<'a, I>(values: I) -> DateOrder
where
    I: IntoIterator<Item = &'a str>,
{
    let mut day_first = 0usize;
    let mut month_first = 0usize;

    for value in values {
        if parse_date(value, DateOrder::DayFirst).is_some() {
            day_first += 1;
        }
        if parse_date(value, DateOrder::MonthFirst).is_some() {
            month_first += 1;
        }
    }

    if month_first > day_first {
        debug!(
            "Date column reads better month-first ({} vs {} values), falling back",
            month_first, day_first
        );
        DateOrder::MonthFirst
    } else {
        DateOrder::DayFirst
    }
}

fn grouped_thousands() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,3}(,\d{3})+(\.\d*)?$").expect("valid regex"))
}

/// Parse an amount, handling currency symbols, thousands separators and
/// accounting-style parentheses. Non-finite values are rejected.
///
/// Commas are only accepted as thousands separators (`1,234.56`). Anything
/// else with a comma, such as a decimal comma, is unparseable.
pub fn parse_amount(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let (parenthesized, body) = match s.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
        Some(inner) => (true, inner),
        None => (false, s),
    };

    let cleaned: String = body
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£' | ' '))
        .collect();

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.strip_prefix('+').unwrap_or(cleaned.as_str())),
    };

    // (-5) is not a valid accounting negative
    if parenthesized && digits.len() != cleaned.len() {
        return None;
    }

    let digits = if digits.contains(',') {
        if !grouped_thousands().is_match(digits) {
            return None;
        }
        digits.replace(',', "")
    } else {
        digits.to_string()
    };

    // A second sign after the first one is not a number
    if digits.starts_with(['-', '+']) {
        return None;
    }

    let value: f64 = digits.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    Some(if negative || parenthesized { -value } else { value })
}

fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or("").trim()
}

fn category_or_default(raw: &str) -> String {
    if raw.is_empty() {
        UNCATEGORIZED.to_string()
    } else {
        raw.to_string()
    }
}

/// Normalize raw CSV records into typed transactions.
///
/// Income/expense flags are left unset; see [`crate::classify`].
pub fn normalize_records(
    records: &[StringRecord],
    columns: &ColumnMap,
    policy: NormalizationPolicy,
) -> Vec<Transaction> {
    let order = detect_date_order(records.iter().map(|r| field(r, columns.date)));

    let mut transactions = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for record in records {
        let date = parse_date(field(record, columns.date), order);
        let amount = parse_amount(field(record, columns.amount));

        if policy == NormalizationPolicy::Strict && (date.is_none() || amount.is_none()) {
            dropped += 1;
            continue;
        }

        transactions.push(Transaction {
            date,
            amount,
            transaction_type: field(record, columns.transaction_type).to_string(),
            transaction_details: field(record, columns.transaction_details).to_string(),
            category: category_or_default(field(record, columns.category)),
            merchant_name: field(record, columns.merchant_name).to_string(),
            is_income: false,
            is_expense: false,
        });
    }

    if dropped > 0 {
        debug!(
            "Dropped {} rows with unparseable date or amount ({} policy)",
            dropped, policy
        );
    }

    debug!("Normalized {} transactions", transactions.len());
    transactions
}
