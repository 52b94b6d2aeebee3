//! Analysis results: per type, per module and per catalog run.

use crate::types::{Severity, Violation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome for one type under one rule.
///
/// Types outside a rule's applicability are recorded as `Passed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeAnalysisStatus {
    /// Conforms, or the rule does not apply.
    Passed,
    /// Breaks the convention.
    Failed,
}

/// Result of one rule invocation on one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAnalysisResult {
    /// Qualified type name.
    pub type_name: String,
    /// Pass/fail status.
    pub status: TypeAnalysisStatus,
    /// Present iff `status` is `Failed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violation: Option<Violation>,
}

impl TypeAnalysisResult {
    /// A passing result.
    #[must_use]
    pub fn passed(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            status: TypeAnalysisStatus::Passed,
            violation: None,
        }
    }

    /// A failing result carrying its violation.
    #[must_use]
    pub fn failed(type_name: impl Into<String>, violation: Violation) -> Self {
        Self {
            type_name: type_name.into(),
            status: TypeAnalysisStatus::Failed,
            violation: Some(violation),
        }
    }

    /// Returns true when passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status == TypeAnalysisStatus::Passed
    }
}

/// Results of one rule over one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnalysisResult {
    /// Module identifier supplied by the caller.
    pub project_name: String,
    /// Type results in declaration order.
    pub type_results: Vec<TypeAnalysisResult>,
}

impl ProjectAnalysisResult {
    /// Creates an empty result for a module.
    #[must_use]
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            type_results: Vec::new(),
        }
    }

    /// Failing results only.
    pub fn failures(&self) -> impl Iterator<Item = &TypeAnalysisResult> {
        self.type_results.iter().filter(|r| !r.is_passed())
    }

    /// Returns true if any type failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Results of one rule across all modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    /// Rule name.
    pub rule: String,
    /// Rule code.
    pub code: String,
    /// Rule description.
    pub description: String,
    /// ADR path.
    pub adr: String,
    /// Per-module results keyed by module identifier.
    pub results: BTreeMap<String, ProjectAnalysisResult>,
}

impl RuleReport {
    /// Iterates `(module, type name, violation)` for every failure.
    pub fn violations(&self) -> impl Iterator<Item = (&str, &str, &Violation)> {
        self.results.iter().flat_map(|(module, project)| {
            project.type_results.iter().filter_map(move |r| {
                r.violation
                    .as_ref()
                    .map(|v| (module.as_str(), r.type_name.as_str(), v))
            })
        })
    }
}

/// Aggregated result of running a rule catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// One report per executed rule, in catalog order.
    pub rules: Vec<RuleReport>,
    /// Number of modules analyzed.
    pub modules_checked: usize,
    /// Number of declared types analyzed (nested types included).
    pub types_checked: usize,
}

impl ConformanceReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates `(module, type name, violation)` across all rules.
    pub fn violations(&self) -> impl Iterator<Item = (&str, &str, &Violation)> {
        self.rules.iter().flat_map(|r| r.violations())
    }

    /// Returns the report of one rule.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&RuleReport> {
        self.rules.iter().find(|r| r.rule == name)
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations().any(|(_, _, v)| v.severity >= severity)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations()
            .fold((0, 0, 0), |(e, w, i), (_, _, v)| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Prints a summary report to stdout.
    pub fn print_report(&self) {
        let (errors, warnings, infos) = self.count_by_severity();

        for (module, type_name, violation) in self.violations() {
            println!("[{module}] {}", violation.format(type_name));
        }

        println!(
            "\nFound {} error(s), {} warning(s), {} info(s) in {} type(s) across {} module(s)",
            errors, warnings, infos, self.types_checked, self.modules_checked
        );
    }

    /// Formats violations as a test failure report.
    ///
    /// Produces a human-readable multi-line report suitable for `panic!()` messages
    /// in `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<(&str, &str, &Violation)> = self
            .violations()
            .filter(|(_, _, v)| v.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(
            report,
            "\n=== entity-lint: {} violation(s) ===\n",
            failing.len()
        );

        for (module, type_name, v) in &failing {
            let _ = writeln!(report, "{} [{}] {module}::{type_name}", v.rule, v.severity);
            let _ = writeln!(report, "  {}", v.message);
            let _ = writeln!(report, "  = hint: {}", v.llm_hint);
            let _ = writeln!(report, "  = see: {}", v.adr);
            let _ = writeln!(report);
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {} error(s), {} warning(s), {} info(s) in {} type(s)",
            errors, warnings, infos, self.types_checked
        );

        report
    }
}
