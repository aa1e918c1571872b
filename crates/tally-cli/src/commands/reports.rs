//! Report command implementation

use std::fmt::{self, Write as _};

use anyhow::{Context, Result};
use tally_core::{BarTone, ChartBar, Report, ReportConfig, ReportPipeline};

use super::truncate;

const CHART_WIDTH: usize = 30;

/// Format a signed amount as dollars
pub fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Horizontal bar chart, one line per category, scaled to the largest total
pub fn render_chart(bars: &[ChartBar], width: usize) -> Vec<String> {
    let max = bars.iter().map(|b| b.amount.abs()).fold(0.0_f64, f64::max);

    bars.iter()
        .map(|bar| {
            let len = if max > 0.0 {
                ((bar.amount.abs() / max) * width as f64).round() as usize
            } else {
                0
            };
            let color = match bar.tone {
                BarTone::Income => "\x1b[32m",  // Green for income
                BarTone::Expense => "\x1b[31m", // Red for expenses
            };
            format!(
                "   {:20} │ {}{}\x1b[0m {}",
                truncate(&bar.category, 20),
                color,
                "█".repeat(len),
                format_money(bar.amount)
            )
        })
        .collect()
}

/// Render the text form of a report. `limit` caps the table rows (0 = all).
pub fn render_report(report: &Report, limit: usize) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out)?;
    writeln!(out, "📊 Report: {}", report.source)?;
    writeln!(
        out,
        "   ─────────────────────────────────────────────────────────────"
    )?;

    if report.is_empty() {
        writeln!(out, "   No transactions in this file.")?;
        return Ok(out);
    }

    writeln!(out, "   Income:  {:>14}", format_money(report.total_income))?;
    writeln!(out, "   Expense: {:>14}", format_money(report.total_expense))?;
    writeln!(out, "   Net:     {:>14}", format_money(report.net))?;

    writeln!(out)?;
    writeln!(out, "📈 By Category")?;
    for line in render_chart(&report.chart_series(), CHART_WIDTH) {
        writeln!(out, "{}", line)?;
    }

    if !report.expense_category_totals.is_empty() {
        writeln!(out)?;
        writeln!(out, "💸 Spent per Category")?;
        for total in &report.expense_category_totals {
            writeln!(
                out,
                "   {:25} │ {:>12} │ {:>5}",
                truncate(&total.category, 25),
                format_money(total.amount),
                total.transaction_count
            )?;
        }
    }

    let shown = if limit == 0 {
        report.transactions.len()
    } else {
        limit.min(report.transactions.len())
    };

    writeln!(out)?;
    writeln!(out, "📝 Transactions")?;
    writeln!(
        out,
        "   {:10} │ {:>12} │ {:15} │ {:20} │ {}",
        "Date", "Amount", "Category", "Merchant", "Details"
    )?;
    writeln!(
        out,
        "   ───────────┼──────────────┼─────────────────┼──────────────────────┼──────────"
    )?;
    for tx in report.transactions.iter().take(shown) {
        let date = tx
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "?".to_string());
        let amount = tx.amount.map(format_money).unwrap_or_else(|| "n/a".to_string());
        writeln!(
            out,
            "   {:10} │ {:>12} │ {:15} │ {:20} │ {}",
            date,
            amount,
            truncate(&tx.category, 15),
            truncate(&tx.merchant_name, 20),
            truncate(&tx.transaction_details, 40)
        )?;
    }
    if shown < report.transactions.len() {
        writeln!(
            out,
            "   ... {} more (use --limit 0 to show all)",
            report.transactions.len() - shown
        )?;
    }

    Ok(out)
}

pub fn cmd_report(config: &ReportConfig, file: &str, json: bool, limit: usize) -> Result<()> {
    let pipeline = ReportPipeline::new(config.clone());
    let report = pipeline
        .run(file)
        .with_context(|| format!("Failed to build report for {}", file))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, limit)?);
    }

    Ok(())
}
