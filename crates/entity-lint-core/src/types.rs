//! Core types for convention violations.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::PathBuf;

/// Severity level for convention violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail the gate.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Parses `"error"`, `"warning"` or `"info"` (case-insensitive).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Source file path.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    #[serde(default = "default_column")]
    pub column: usize,
}

fn default_column() -> usize {
    1
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A convention violation found during analysis.
///
/// Violations are assembled by the analyzer from a rule's finding, so `rule`
/// and `adr` always carry the owning rule's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule name (e.g., `DE005_AggregateRootInterface`).
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Self-contained, human-readable message.
    pub message: String,
    /// Path of the architectural decision record the rule encodes.
    pub adr: String,
    /// Symbol-specific remediation suggestion for fix tooling.
    pub llm_hint: String,
    /// Location of the offending symbol, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Violation {
    /// Returns the rule code (the part of the rule name before `_`).
    #[must_use]
    pub fn code(&self) -> &str {
        self.rule.split('_').next().unwrap_or(&self.rule)
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self, type_name: &str) -> String {
        use std::fmt::Write;
        let mut output = format!("{} {}", self.rule, type_name);
        if let Some(location) = &self.location {
            let _ = write!(output, " at {location}");
        }
        output.push('\n');
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        let _ = writeln!(output, "  = hint: {}", self.llm_hint);
        let _ = writeln!(output, "  = see: {}", self.adr);
        output
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = &self.location {
            write!(f, "{location}: ")?;
        }
        write!(
            f,
            "{} [{}] {} (see: {})",
            self.severity,
            self.code(),
            self.message,
            self.adr
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    rule: String,
    severity: Severity,
    help: String,
    adr: String,
}

impl Diagnostic for ViolationDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(&self.rule))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(format!("{}\nsee: {}", self.help, self.adr)))
    }
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        let message = match &v.location {
            Some(location) => format!("{location}: {}", v.message),
            None => v.message.clone(),
        };
        Self {
            message,
            rule: v.rule.clone(),
            severity: v.severity,
            help: v.llm_hint.clone(),
            adr: v.adr.clone(),
        }
    }
}
