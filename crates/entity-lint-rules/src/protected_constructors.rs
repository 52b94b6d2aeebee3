//! Rule requiring constructors of abstract entities to be exactly protected.

use entity_lint_core::{Accessibility, Finding, Rule, Severity, TypeContext, Verdict};

/// Rule code for protected-constructors.
pub const CODE: &str = "DE008";

/// Rule name for protected-constructors.
pub const NAME: &str = "DE008_ProtectedConstructors";

/// Decision record for protected-constructors.
pub const ADR: &str = "docs/adr/0008-protected-constructors.md";

/// Requires every constructor of an abstract entity to be protected.
#[derive(Debug, Clone)]
pub struct ProtectedConstructors {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ProtectedConstructors {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtectedConstructors {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ProtectedConstructors {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires constructors of abstract entities to be protected"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn adr_path(&self) -> &'static str {
        ADR
    }

    fn is_applicable(&self, ty: &TypeContext<'_>) -> bool {
        ty.is_abstract_entity()
    }

    fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict {
        ty.decl
            .constructors()
            .find(|c| c.accessibility != Accessibility::Protected)
            .map(|c| {
                Finding::new(
                    format!(
                        "Constructor of abstract entity `{}` is {} but must be protected",
                        ty.name(),
                        c.accessibility
                    ),
                    format!("Change the `{}` constructor to `protected`", ty.name()),
                )
                .at(c.location.as_ref())
                .at(ty.location())
            })
            .into()
    }
}
