//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::fs;
use std::path::Path;

use tally_core::{NormalizationPolicy, ReportConfig, ReportPipeline};
use tempfile::TempDir;

use crate::commands::{self, format_money, render_chart, render_report, truncate};

const HOUSEHOLD_CSV: &str = "\
Date,Amount,Transaction Type,Transaction Details,Category,Merchant Name
15/01/2024,-15.60,Debit,Weekly shop,Groceries,FreshMart
01/01/2024,2500.00,Credit,January salary,Salary,Acme Ltd
03/01/2024,-1200,Debit,Rent,Housing,Landlord
10/01/2024,-15,Debit,Parking,,City Council
";

/// Create a data directory holding `files` and a config pointing at it
fn setup_data_dir(files: &[(&str, &str)]) -> (TempDir, ReportConfig) {
    let dir = TempDir::new().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    let config = ReportConfig::new(dir.path());
    (dir, config)
}

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

// ========== Utility Tests ==========

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Groceries", 20), "Groceries");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Monthly subscription renewal", 10), "Monthly...");
}

#[test]
fn test_truncate_multibyte() {
    // Must not split inside a character
    assert_eq!(truncate("Café Crème Brûlée", 8), "Café ...");
}

#[test]
fn test_format_money() {
    assert_eq!(format_money(2500.0), "$2500.00");
    assert_eq!(format_money(-15.6), "-$15.60");
    assert_eq!(format_money(0.0), "$0.00");
}

// ========== Setup Tests ==========

#[test]
fn test_resolve_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "data_dir = \"/srv/ledgers\"\nextension = \"txt\"\npolicy = \"strict\"\n",
    );

    let config = commands::resolve_config(None, Some(&path)).unwrap();
    assert_eq!(config.extension, "txt");
    // Env overrides may apply on top, so only check when unset
    if std::env::var(tally_core::config::DATA_DIR_ENV).is_err() {
        assert_eq!(config.data_dir, Path::new("/srv/ledgers"));
    }
    if std::env::var(tally_core::config::POLICY_ENV).is_err() {
        assert_eq!(config.policy, NormalizationPolicy::Strict);
    }
}

#[test]
fn test_resolve_config_data_dir_flag_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "data_dir = \"/srv/ledgers\"\n");

    let config = commands::resolve_config(Some(Path::new("/tmp/override")), Some(&path)).unwrap();
    assert_eq!(config.data_dir, Path::new("/tmp/override"));
}

#[test]
fn test_resolve_config_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let result = commands::resolve_config(None, Some(&path));
    assert!(result.is_err());
}

#[test]
fn test_resolve_config_invalid_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(dir.path(), "data_dir = \"x\"\nunknown_key = 1\n");
    let result = commands::resolve_config(None, Some(&path));
    assert!(result.is_err());
}

#[test]
fn test_with_policy_override() {
    let config = ReportConfig::new("/tmp");
    let config = commands::with_policy(config, Some("Strict")).unwrap();
    assert_eq!(config.policy, NormalizationPolicy::Strict);
}

#[test]
fn test_with_policy_none_keeps_config() {
    let config = ReportConfig::new("/tmp").with_policy(NormalizationPolicy::Strict);
    let config = commands::with_policy(config, None).unwrap();
    assert_eq!(config.policy, NormalizationPolicy::Strict);
}

#[test]
fn test_with_policy_invalid() {
    let config = ReportConfig::new("/tmp");
    let result = commands::with_policy(config, Some("sloppy"));
    assert!(result.is_err());
}

// ========== Files Command Tests ==========

#[test]
fn test_cmd_files() {
    let (_dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV), ("notes.md", "x")]);
    let result = commands::cmd_files(&config);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_files_missing_dir() {
    let config = ReportConfig::new("/definitely/not/a/real/dir");
    let result = commands::cmd_files(&config);
    assert!(result.is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_report_text() {
    let (_dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV)]);
    let result = commands::cmd_report(&config, "january.csv", false, 20);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_report_json() {
    let (_dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV)]);
    let result = commands::cmd_report(&config, "january.csv", true, 0);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_report_missing_file() {
    let (_dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV)]);
    let result = commands::cmd_report(&config, "ghost.csv", false, 20);
    assert!(result.is_err());
    let msg = format!("{:#}", result.unwrap_err());
    assert!(msg.contains("ghost.csv"));
}

#[test]
fn test_cmd_report_schema_error() {
    let (_dir, config) = setup_data_dir(&[("broken.csv", "Date,Amount\n01/01/2024,5\n")]);
    let result = commands::cmd_report(&config, "broken.csv", false, 20);
    assert!(result.is_err());
    let msg = format!("{:#}", result.unwrap_err());
    assert!(msg.contains("Missing columns"));
    assert!(msg.contains("merchant name"));
}

#[test]
fn test_render_report_sections() {
    let (_dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV)]);
    let report = ReportPipeline::new(config).run("january.csv").unwrap();

    let text = render_report(&report, 0).unwrap();
    assert!(text.contains("january.csv"));
    assert!(text.contains("$2500.00"));
    assert!(text.contains("-$1230.60"));
    assert!(text.contains("$1269.40"));
    assert!(text.contains("Housing"));
    assert!(text.contains("Uncategorized"));
    assert!(text.contains("2024-01-15"));
    assert!(!text.contains("more (use --limit 0"));
}

#[test]
fn test_render_report_limit() {
    let (_dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV)]);
    let report = ReportPipeline::new(config).run("january.csv").unwrap();

    let text = render_report(&report, 2).unwrap();
    assert!(text.contains("2 more"));
    // Rows are chronological, so the last one is cut
    assert!(!text.contains("2024-01-15"));
}

#[test]
fn test_render_report_empty() {
    let header = "Date,Amount,Transaction Type,Transaction Details,Category,Merchant Name\n";
    let (_dir, config) = setup_data_dir(&[("empty.csv", header)]);
    let report = ReportPipeline::new(config).run("empty.csv").unwrap();

    let text = render_report(&report, 20).unwrap();
    assert!(text.contains("No transactions"));
}

#[test]
fn test_render_chart_scaling() {
    let (_dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV)]);
    let report = ReportPipeline::new(config).run("january.csv").unwrap();

    let lines = render_chart(&report.chart_series(), 10);
    assert_eq!(lines.len(), 4);
    // Largest absolute total gets the full width
    let salary = lines.iter().find(|l| l.contains("Salary")).unwrap();
    assert!(salary.contains(&"█".repeat(10)));
    assert!(salary.contains("\x1b[32m"));
    let housing = lines.iter().find(|l| l.contains("Housing")).unwrap();
    assert!(housing.contains("\x1b[31m"));
    assert!(!housing.contains(&"█".repeat(6)));
}

#[test]
fn test_render_chart_empty() {
    assert!(render_chart(&[], 30).is_empty());
}

// ========== Export Command Tests ==========

#[test]
fn test_cmd_export_to_file() {
    let (dir, config) = setup_data_dir(&[("january.csv", HOUSEHOLD_CSV)]);
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("normalized.csv");

    commands::cmd_export(&config, "january.csv", Some(&output)).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,amount,transaction type,transaction details,category,merchant name"
    );
    assert!(lines.next().unwrap().starts_with("2024-01-01,2500,"));
    assert!(content.contains("Uncategorized"));

    // The exported table loads back to the same rows
    fs::copy(&output, dir.path().join("again.csv")).unwrap();
    let pipeline = ReportPipeline::new(ReportConfig::new(dir.path()));
    let original = pipeline.load_table("january.csv").unwrap();
    let reloaded = pipeline.load_table("again.csv").unwrap();
    assert_eq!(original, reloaded);
}

#[test]
fn test_cmd_export_missing_file() {
    let (_dir, config) = setup_data_dir(&[]);
    let result = commands::cmd_export(&config, "ghost.csv", None);
    assert!(result.is_err());
}
