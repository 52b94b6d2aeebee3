//! Rule requiring `Set*` methods on abstract entities to be private.
//!
//! # Rationale
//!
//! State changes on an entity go through intention-revealing operations.
//! Setters on the abstract base are plumbing for those operations and must
//! not leak to subclasses or callers.
//!
//! # Detected Patterns
//!
//! - `protected void SetStatus(...)` on an abstract entity
//! - `public void SetName(...)` on an abstract entity

use entity_lint_core::utils::names::is_setter;
use entity_lint_core::{Accessibility, Finding, Rule, Severity, TypeContext, Verdict};

/// Rule code for private-set-methods.
pub const CODE: &str = "DE001";

/// Rule name for private-set-methods.
pub const NAME: &str = "DE001_PrivateSetMethods";

/// Decision record for private-set-methods.
pub const ADR: &str = "docs/adr/0001-private-setters.md";

/// Requires `Set*` methods on abstract entities to be private.
#[derive(Debug, Clone)]
pub struct PrivateSetMethods {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PrivateSetMethods {
    fn default() -> Self {
        Self::new()
    }
}

impl PrivateSetMethods {
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

impl Rule for PrivateSetMethods {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires `Set*` methods on abstract entities to be private"
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
            .find(|m| is_setter(&m.name) && m.accessibility != Accessibility::Private)
            .map(|m| {
                Finding::new(
                    format!(
                        "Method `{}.{}` is {} but must be private",
                        ty.name(),
                        m.name,
                        m.accessibility
                    ),
                    format!("Change `{}` in `{}` to `private`", m.name, ty.name()),
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
    use crate::test_support::{abstract_entity, check, concrete_entity};
    use entity_lint_core::{Location, Member};

    #[test]
    fn test_detects_protected_setter() {
        let ty = abstract_entity("AuditableEntity")
            .with_member(Member::method("SetAuditInfo", Accessibility::Protected))
            .with_member(Member::method("SetOwner", Accessibility::Public));

        let violation = check(&PrivateSetMethods::new(), ty).expect("should fail");
        assert_eq!(
            violation.message,
            "Method `AuditableEntity.SetAuditInfo` is protected but must be private"
        );
        assert_eq!(violation.llm_hint, "Change `SetAuditInfo` in `AuditableEntity` to `private`");
    }

    #[test]
    fn test_allows_private_setter_and_other_methods() {
        let ty = abstract_entity("AuditableEntity")
            .with_member(Member::method("SetAuditInfo", Accessibility::Private))
            .with_member(Member::method("Settle", Accessibility::Private))
            .with_member(Member::method("Rename", Accessibility::Public));
        assert!(check(&PrivateSetMethods::new(), ty).is_none());
    }

    #[test]
    fn test_ignores_concrete_entities() {
        let ty = concrete_entity("Order")
            .with_member(Member::method("SetStatus", Accessibility::Public));
        assert!(check(&PrivateSetMethods::new(), ty).is_none());
    }

    #[test]
    fn test_prefers_member_location() {
        let ty = abstract_entity("AuditableEntity")
            .at(Location::new("src/AuditableEntity.cs", 3, 1))
            .with_member(
                Member::method("SetOwner", Accessibility::Internal)
                    .at(Location::new("src/AuditableEntity.cs", 14, 5)),
            );
        let violation = check(&PrivateSetMethods::new(), ty).expect("should fail");
        assert_eq!(
            violation.location,
            Some(Location::new("src/AuditableEntity.cs", 14, 5))
        );
    }
}
