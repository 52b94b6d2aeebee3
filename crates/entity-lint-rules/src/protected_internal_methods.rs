//! Rule requiring `*Internal` methods on abstract entities to be exactly
//! protected.
//!
//! `*Internal` methods are the mutation hooks concrete entities call from
//! their public operations. Private hides them from subclasses; anything
//! wider than protected lets callers bypass the public operation.

use entity_lint_core::utils::names::is_internal_mutation;
use entity_lint_core::{Accessibility, Finding, Rule, Severity, TypeContext, Verdict};

/// Rule code for protected-internal-methods.
pub const CODE: &str = "DE003";

/// Rule name for protected-internal-methods.
pub const NAME: &str = "DE003_ProtectedInternalMethods";

/// Decision record for protected-internal-methods.
pub const ADR: &str = "docs/adr/0003-protected-internal-mutations.md";

/// Requires `*Internal` methods on abstract entities to be protected.
#[derive(Debug, Clone)]
pub struct ProtectedInternalMethods {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ProtectedInternalMethods {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtectedInternalMethods {
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

impl Rule for ProtectedInternalMethods {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires `*Internal` methods on abstract entities to be protected"
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
            .methods()
            .find(|m| is_internal_mutation(&m.name) && m.accessibility != Accessibility::Protected)
            .map(|m| {
                Finding::new(
                    format!(
                        "Method `{}.{}` is {} but must be protected",
                        ty.name(),
                        m.name,
                        m.accessibility
                    ),
                    format!("Change `{}` in `{}` to `protected`", m.name, ty.name()),
                )
                .at(m.location.as_ref())
                .at(ty.location())
            })
            .into()
    }
}
