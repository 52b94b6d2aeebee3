//! Rule requiring enumerations to use the narrowest underlying integer type.
//!
//! Candidates are tried from the smallest footprint upward (`byte`, `sbyte`,
//! `short`, `ushort`, `int`, `uint`, `long`, `ulong`). The enum fails when the
//! first candidate holding every member value is narrower than the declared
//! width.

use entity_lint_core::{Finding, IntegerWidth, Rule, Severity, TypeContext, TypeKind, Verdict};

/// Rule code for minimal-underlying-type.
pub const CODE: &str = "EN002";

/// Rule name for minimal-underlying-type.
pub const NAME: &str = "EN002_MinimalUnderlyingType";

/// Decision record for minimal-underlying-type.
pub const ADR: &str = "docs/adr/0102-enum-underlying-type.md";

/// Requires the narrowest underlying type that holds every member.
#[derive(Debug, Clone)]
pub struct MinimalUnderlyingType {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MinimalUnderlyingType {
    fn default() -> Self {
        Self::new()
    }
}

impl MinimalUnderlyingType {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Smallest-footprint width holding every value.
fn minimal_width(values: &[i128]) -> Option<IntegerWidth> {
    IntegerWidth::BY_FOOTPRINT
        .into_iter()
        .find(|w| values.iter().all(|v| w.holds(*v)))
}

impl Rule for MinimalUnderlyingType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires enumerations to use the narrowest underlying integer type"
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
        let values: Vec<i128> = info.members.iter().map(|m| m.value).collect();
        let Some(minimal) = minimal_width(&values) else {
            return Verdict::Pass;
        };
        if minimal.bits() >= info.underlying.bits() {
            return Verdict::Pass;
        }

        Verdict::Fail(
            Finding::new(
                format!(
                    "Enum `{}` uses `{}` but every value fits in `{minimal}`",
                    ty.name(),
                    info.underlying
                ),
                format!("Change the underlying type of `{}` to `{minimal}`", ty.name()),
            )
            .at(ty.location()),
        )
    }
}
