//! Rule forbidding reconstruction factories on abstract entities.
//!
//! `CreateFromExistingInfo` rebuilds an entity from persisted state. It is
//! only meaningful on a concrete type; on an abstract base it cannot produce
//! an instance.
//!
//! # Configuration
//!
//! - `factory`: reserved factory name (default: `CreateFromExistingInfo`)

use entity_lint_core::{Finding, Rule, RuleConfig, Severity, TypeContext, Verdict};

/// Rule code for no-create-from-existing-info.
pub const CODE: &str = "DE011";

/// Rule name for no-create-from-existing-info.
pub const NAME: &str = "DE011_NoCreateFromExistingInfo";

/// Decision record for no-create-from-existing-info.
pub const ADR: &str = "docs/adr/0011-reconstruction-factories.md";

/// Forbids the reconstruction factory on abstract entities.
#[derive(Debug, Clone)]
pub struct NoCreateFromExistingInfo {
    /// Reserved factory method name.
    pub factory: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoCreateFromExistingInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl NoCreateFromExistingInfo {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factory: "CreateFromExistingInfo".to_string(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let rule = Self::new();
        match config {
            Some(c) => {
                let factory = c.get_str("factory", &rule.factory).to_string();
                rule.factory(factory)
            }
            None => rule,
        }
    }

    /// Sets the reserved factory name.
    #[must_use]
    pub fn factory(mut self, factory: impl Into<String>) -> Self {
        self.factory = factory.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoCreateFromExistingInfo {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids the `CreateFromExistingInfo` factory on abstract entities"
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
            .find(|m| m.is_static && m.name == self.factory)
            .map(|m| {
                Finding::new(
                    format!(
                        "Abstract entity `{}` declares static factory `{}`",
                        ty.name(),
                        m.name
                    ),
                    format!(
                        "Move `{}` from `{}` to each concrete entity deriving from it",
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
    use crate::test_support::{abstract_entity, check, concrete_entity};
    use entity_lint_core::{Accessibility, Member};

    #[test]
    fn test_detects_factory_on_abstract_entity() {
        let ty = abstract_entity("Vehicle").with_member(
            Member::method("CreateFromExistingInfo", Accessibility::Public).static_(),
        );
        let violation = check(&NoCreateFromExistingInfo::new(), ty).expect("should fail");
        assert_eq!(
            violation.message,
            "Abstract entity `Vehicle` declares static factory `CreateFromExistingInfo`"
        );
    }

    #[test]
    fn test_concrete_entities_may_declare_it() {
        let ty = concrete_entity("Truck").with_member(
            Member::method("CreateFromExistingInfo", Accessibility::Public).static_(),
        );
        assert!(check(&NoCreateFromExistingInfo::new(), ty).is_none());
    }

    #[test]
    fn test_configured_factory_name() {
        let rule = NoCreateFromExistingInfo::new().factory("Rehydrate");
        let ty = abstract_entity("Vehicle")
            .with_member(Member::method("Rehydrate", Accessibility::Public).static_());
        assert!(check(&rule, ty).is_some());
    }
}
