//! Shared output formatting for check results.

use anyhow::{Context, Result};
use entity_lint_core::{ConformanceReport, Severity, ViolationDiagnostic};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// JSON document written by `check --output`.
#[derive(Serialize)]
struct ReportFile<'a> {
    tool: &'static str,
    version: &'static str,
    #[serde(flatten)]
    report: &'a ConformanceReport,
}

impl<'a> ReportFile<'a> {
    fn new(report: &'a ConformanceReport) -> Self {
        Self {
            tool: "entity-lint",
            version: env!("CARGO_PKG_VERSION"),
            report,
        }
    }
}

/// Print check results in the specified format.
pub fn print(report: &ConformanceReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

/// Writes the JSON report into `dir`, creating it if needed.
pub fn write_report(report: &ConformanceReport, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(super::check::REPORT_FILE);
    let json = serde_json::to_string_pretty(&ReportFile::new(report))?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(path)
}

fn print_text(report: &ConformanceReport) {
    let (errors, warnings, infos) = report.count_by_severity();

    for (module, type_name, violation) in report.violations() {
        println!("[{module}] {type_name}");
        let diagnostic = miette::Report::new(ViolationDiagnostic::from(violation));
        println!("{diagnostic:?}");
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} type(s) across {} module(s)\x1b[0m",
        summary_color, errors, warnings, infos, report.types_checked, report.modules_checked
    );
}

fn print_json(report: &ConformanceReport) -> Result<()> {
    let json = serde_json::to_string_pretty(&ReportFile::new(report))?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &ConformanceReport) {
    for (module, type_name, violation) in report.violations() {
        let location = violation
            .location
            .as_ref()
            .map_or_else(|| format!("{module}::{type_name}"), ToString::to_string);
        println!(
            "{location}: {} [{}] {}",
            severity_label(violation.severity),
            violation.code(),
            violation.message,
        );
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_file_flattens_report_fields() {
        let report = ConformanceReport {
            modules_checked: 2,
            types_checked: 5,
            ..ConformanceReport::default()
        };
        let value = serde_json::to_value(ReportFile::new(&report)).expect("serialize");
        assert_eq!(value["tool"], "entity-lint");
        assert_eq!(value["types_checked"], 5);
        assert!(value["rules"].as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn write_report_creates_directory() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let dir = tmp.path().join("out/reports");
        let path = write_report(&ConformanceReport::default(), &dir).expect("write");
        assert!(path.ends_with(super::super::check::REPORT_FILE));
        assert!(path.exists());
    }
}
