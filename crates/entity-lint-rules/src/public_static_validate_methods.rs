//! Rule requiring `Validate*` methods on abstract entities to be public and
//! static.
//!
//! Validation runs before an entity exists (in factories, in request
//! handlers), so it cannot depend on instance state and must be reachable
//! from outside the hierarchy.

use entity_lint_core::utils::names::is_validation;
use entity_lint_core::{Accessibility, Finding, Member, Rule, Severity, TypeContext, Verdict};

/// Rule code for public-static-validate-methods.
pub const CODE: &str = "DE002";

/// Rule name for public-static-validate-methods.
pub const NAME: &str = "DE002_PublicStaticValidateMethods";

/// Decision record for public-static-validate-methods.
pub const ADR: &str = "docs/adr/0002-static-validation.md";

/// Requires `Validate*` methods on abstract entities to be `public static`.
#[derive(Debug, Clone)]
pub struct PublicStaticValidateMethods {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PublicStaticValidateMethods {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicStaticValidateMethods {
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

    fn problem(method: &Member) -> Option<String> {
        if !method.is_static {
            Some("must be static".to_string())
        } else if method.accessibility != Accessibility::Public {
            Some(format!("must be public, not {}", method.accessibility))
        } else {
            None
        }
    }
}

impl Rule for PublicStaticValidateMethods {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires `Validate*` methods on abstract entities to be public and static"
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
            .filter(|m| is_validation(&m.name))
            .find_map(|m| {
                Self::problem(m).map(|problem| {
                    Finding::new(
                        format!("Validation method `{}.{}` {problem}", ty.name(), m.name),
                        format!("Declare `{}` in `{}` as `public static`", m.name, ty.name()),
                    )
                    .at(m.location.as_ref())
                    .at(ty.location())
                })
            })
            .into()
    }
}
