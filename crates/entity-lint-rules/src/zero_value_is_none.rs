//! Rule requiring the zero value of an enumeration to be named `None`.
//!
//! The default value of every enum is `0`, so the member holding it must say
//! "nothing chosen". A literal `0` on any other member, or no zero member at
//! all, fails.
//!
//! # Configuration
//!
//! - `zero_name`: conventional zero member name (default: `None`)

use entity_lint_core::{Finding, Rule, RuleConfig, Severity, TypeContext, TypeKind, Verdict};

/// Rule code for zero-value-is-none.
pub const CODE: &str = "EN003";

/// Rule name for zero-value-is-none.
pub const NAME: &str = "EN003_ZeroValueIsNone";

/// Decision record for zero-value-is-none.
pub const ADR: &str = "docs/adr/0103-enum-zero-value.md";

/// Requires the zero-valued enum member to carry the conventional name.
#[derive(Debug, Clone)]
pub struct ZeroValueIsNone {
    /// Conventional zero member name.
    pub zero_name: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ZeroValueIsNone {
    fn default() -> Self {
        Self::new()
    }
}

impl ZeroValueIsNone {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zero_name: "None".to_string(),
            severity: Severity::Warning,
        }
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let rule = Self::new();
        match config {
            Some(c) => {
                let zero_name = c.get_str("zero_name", &rule.zero_name).to_string();
                rule.zero_name(zero_name)
            }
            None => rule,
        }
    }

    /// Sets the conventional zero member name.
    #[must_use]
    pub fn zero_name(mut self, zero_name: impl Into<String>) -> Self {
        self.zero_name = zero_name.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ZeroValueIsNone {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the zero value of an enumeration to be named `None`"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn adr_path(&self) -> &'static str {
        ADR
    }

    fn is_applicable(&self, ty: &TypeContext<'_>) -> bool {
        ty.decl.kind == TypeKind::Enum && ty.decl.enum_info.is_some()
    }

    fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict {
        let Some(info) = ty.decl.enum_info.as_ref() else {
            return Verdict::Pass;
        };
        let zero = &self.zero_name;

        if let Some(member) = info
            .members
            .iter()
            .find(|m| m.value == 0 && m.name != *zero)
        {
            return Verdict::Fail(
                Finding::new(
                    format!(
                        "Enum `{}` assigns literal `0` to `{}`; the zero value must be named `{zero}`",
                        ty.name(),
                        member.name
                    ),
                    format!(
                        "Rename `{}.{}` to `{zero}` or give it a non-zero value",
                        ty.name(),
                        member.name
                    ),
                )
                .at(ty.location()),
            );
        }

        if info.members.iter().any(|m| m.value == 0) {
            return Verdict::Pass;
        }

        Verdict::Fail(
            Finding::new(
                format!("Enum `{}` has no member with value `0`", ty.name()),
                format!("Add `{zero} = 0` as the first member of `{}`", ty.name()),
            )
            .at(ty.location()),
        )
    }
}
