//! Rule forbidding the `Enum` suffix on enumeration names.
//!
//! # Configuration
//!
//! - `suffix`: banned suffix (default: `Enum`; an empty value keeps the default)

use entity_lint_core::utils::has_suffix;
use entity_lint_core::{Finding, Rule, RuleConfig, Severity, TypeContext, TypeKind, Verdict};

/// Rule code for no-enum-suffix.
pub const CODE: &str = "EN001";

/// Rule name for no-enum-suffix.
pub const NAME: &str = "EN001_NoEnumSuffix";

/// Decision record for no-enum-suffix.
pub const ADR: &str = "docs/adr/0101-enum-naming.md";

/// Forbids a banned suffix on enumeration names.
#[derive(Debug, Clone)]
pub struct NoEnumSuffix {
    /// Banned suffix.
    pub suffix: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoEnumSuffix {
    fn default() -> Self {
        Self::new()
    }
}

impl NoEnumSuffix {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suffix: "Enum".to_string(),
            severity: Severity::Warning,
        }
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let rule = Self::new();
        match config
            .map(|c| c.get_str("suffix", "").trim())
            .filter(|s| !s.is_empty())
        {
            Some(suffix) => rule.suffix(suffix),
            None => rule,
        }
    }

    /// Sets the banned suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoEnumSuffix {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids the `Enum` suffix on enumeration names"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn adr_path(&self) -> &'static str {
        ADR
    }

    fn is_applicable(&self, ty: &TypeContext<'_>) -> bool {
        ty.decl.kind == TypeKind::Enum
    }

    fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict {
        let name = ty.name();
        if self.suffix.is_empty() || !has_suffix(name, &self.suffix) {
            return Verdict::Pass;
        }

        let stripped = &name[..name.len() - self.suffix.len()];
        let hint = if stripped.is_empty() {
            format!("Rename `{name}` so it does not end with `{}`", self.suffix)
        } else {
            format!("Rename `{name}` to `{stripped}`")
        };

        Verdict::Fail(
            Finding::new(
                format!("Enum `{name}` ends with the `{}` suffix", self.suffix),
                hint,
            )
            .at(ty.location()),
        )
    }
}
