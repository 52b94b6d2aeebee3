//! Rule forbidding public instance methods on abstract entities.
//!
//! Business operations belong on concrete entities. The abstract base only
//! exposes validation (`public static Validate*`) and static helpers.

use entity_lint_core::utils::names::is_validation;
use entity_lint_core::{Accessibility, Finding, Rule, Severity, TypeContext, Verdict};

/// Rule code for no-public-instance-methods.
pub const CODE: &str = "DE004";

/// Rule name for no-public-instance-methods.
pub const NAME: &str = "DE004_NoPublicInstanceMethods";

/// Decision record for no-public-instance-methods.
pub const ADR: &str = "docs/adr/0004-no-public-instance-methods.md";

/// Forbids public, non-static, non-validation methods on abstract entities.
#[derive(Debug, Clone)]
pub struct NoPublicInstanceMethods {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoPublicInstanceMethods {
    fn default() -> Self {
        Self::new()
    }
}

impl NoPublicInstanceMethods {
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

impl Rule for NoPublicInstanceMethods {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids public instance methods on abstract entities"
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
            .find(|m| {
                m.accessibility == Accessibility::Public && !m.is_static && !is_validation(&m.name)
            })
            .map(|m| {
                Finding::new(
                    format!(
                        "Abstract entity `{}` exposes public instance method `{}`",
                        ty.name(),
                        m.name
                    ),
                    format!(
                        "Make `{}` protected in `{}` and expose the operation from the concrete entity",
                        m.name,
                        ty.name()
                    ),
                )
                .at(m.location.as_ref())
                .at(ty.location())
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abstract_entity, check};
    use entity_lint_core::Member;

    #[test]
    fn test_detects_public_instance_method() {
        let ty = abstract_entity("Account")
            .with_member(Member::method("Deposit", Accessibility::Public));
        let violation = check(&NoPublicInstanceMethods::new(), ty).expect("should fail");
        assert_eq!(
            violation.message,
            "Abstract entity `Account` exposes public instance method `Deposit`"
        );
    }

    #[test]
    fn test_static_and_validation_methods_are_exempt() {
        let ty = abstract_entity("Account")
            .with_member(Member::method("Parse", Accessibility::Public).static_())
            .with_member(Member::method("ValidateIban", Accessibility::Public))
            .with_member(Member::method("DepositInternal", Accessibility::Protected));
        assert!(check(&NoPublicInstanceMethods::new(), ty).is_none());
    }
}
