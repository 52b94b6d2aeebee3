//! Rule trait for defining convention rules.

use crate::analyzer::Analyzer;
use crate::classifier::TypeContext;
use crate::model::{Location, ModuleSet};
use crate::result::ProjectAnalysisResult;
use crate::types::Severity;
use std::collections::BTreeMap;
use std::path::Path;

/// Negative verdict details produced by a rule.
///
/// The analyzer turns a finding into a [`crate::Violation`], filling in the
/// rule name, ADR path and severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Self-contained message naming the offending symbol.
    pub message: String,
    /// Remediation hint naming the concrete fix.
    pub llm_hint: String,
    /// Location of the offending symbol.
    pub location: Option<Location>,
}

impl Finding {
    /// Creates a finding without a location.
    #[must_use]
    pub fn new(message: impl Into<String>, llm_hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            llm_hint: llm_hint.into(),
            location: None,
        }
    }

    /// Attaches the first known location.
    #[must_use]
    pub fn at(mut self, location: Option<&Location>) -> Self {
        if self.location.is_none() {
            self.location = location.cloned();
        }
        self
    }
}

/// Outcome of evaluating one rule against one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No violation.
    Pass,
    /// The type breaks the convention.
    Fail(Finding),
}

impl Verdict {
    /// Returns true for [`Verdict::Pass`].
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns the finding of a failing verdict.
    #[must_use]
    pub fn finding(&self) -> Option<&Finding> {
        match self {
            Self::Pass => None,
            Self::Fail(finding) => Some(finding),
        }
    }
}

impl From<Option<Finding>> for Verdict {
    fn from(finding: Option<Finding>) -> Self {
        finding.map_or(Self::Pass, Self::Fail)
    }
}

/// A convention rule evaluated per declared type.
///
/// Rules are immutable once constructed and shared across concurrent
/// evaluations. The analyzer calls [`Rule::evaluate`] only for types that
/// pass [`Rule::is_applicable`]; every other type is recorded as passed.
///
/// # Example
///
/// ```ignore
/// use entity_lint_core::{Finding, Rule, TypeContext, Verdict};
///
/// pub struct NoPublicFields;
///
/// impl Rule for NoPublicFields {
///     fn name(&self) -> &'static str { "DE100_NoPublicFields" }
///     fn adr_path(&self) -> &'static str { "docs/adr/0100-encapsulation.md" }
///
///     fn is_applicable(&self, ty: &TypeContext<'_>) -> bool {
///         ty.is_concrete_entity()
///     }
///
///     fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict {
///         ty.decl
///             .fields()
///             .find(|f| f.accessibility == Accessibility::Public)
///             .map(|f| Finding::new(
///                 format!("Field `{}.{}` is public", ty.name(), f.name),
///                 format!("Make `{}` private", f.name),
///             ))
///             .into()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the stable rule name (e.g., `DE005_AggregateRootInterface`).
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., `DE005`).
    fn code(&self) -> &'static str {
        let name = self.name();
        name.split('_').next().unwrap_or(name)
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Returns the path of the architectural decision record this rule encodes.
    fn adr_path(&self) -> &'static str;

    /// Decides whether this rule considers the type at all.
    fn is_applicable(&self, ty: &TypeContext<'_>) -> bool;

    /// Evaluates an applicable type.
    fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict;

    /// Runs this rule alone over every module.
    ///
    /// `output_path` belongs to the report writer; evaluation never reads it.
    fn analyze(
        &self,
        modules: &ModuleSet,
        output_path: &Path,
    ) -> BTreeMap<String, ProjectAnalysisResult> {
        tracing::debug!(
            "Running {} standalone (report output: {})",
            self.name(),
            output_path.display()
        );
        Analyzer::default().analyze_rule(self, modules)
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
