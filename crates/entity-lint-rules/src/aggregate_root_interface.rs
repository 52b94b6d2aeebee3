//! Rule requiring aggregate roots to implement the marker interface.
//!
//! # Rationale
//!
//! Repositories and unit-of-work plumbing accept only types carrying the
//! aggregate-root marker. A concrete entity named as an aggregate root but
//! missing the marker silently falls out of that plumbing.
//!
//! # Configuration
//!
//! - `suffix`: name suffix designating aggregate roots (default `AggregateRoot`)
//! - `interface`: marker interface (default `IAggregateRoot`), matched by its
//!   last name segment with generic arguments ignored

use entity_lint_core::utils::{has_suffix, last_segment};
use entity_lint_core::{Finding, Rule, RuleConfig, Severity, TypeContext, Verdict};

/// Rule code for aggregate-root-interface.
pub const CODE: &str = "DE005";

/// Rule name for aggregate-root-interface.
pub const NAME: &str = "DE005_AggregateRootInterface";

/// Decision record for aggregate-root-interface.
pub const ADR: &str = "docs/adr/0005-aggregate-root-marker.md";

/// Requires concrete aggregate roots to implement the marker interface.
#[derive(Debug, Clone)]
pub struct AggregateRootInterface {
    /// Name suffix designating aggregate roots.
    pub suffix: String,
    /// Required marker interface.
    pub interface: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for AggregateRootInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRootInterface {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            suffix: "AggregateRoot".to_string(),
            interface: "IAggregateRoot".to_string(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let rule = Self::new();
        match config {
            Some(c) => {
                let suffix = c.get_str("suffix", &rule.suffix).to_string();
                let interface = c.get_str("interface", &rule.interface).to_string();
                rule.suffix(suffix).interface(interface)
            }
            None => rule,
        }
    }

    /// Sets the aggregate-root name suffix.
    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the required marker interface.
    #[must_use]
    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = interface.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn implements_marker(&self, interfaces: &[String]) -> bool {
        let marker = last_segment(&self.interface);
        interfaces.iter().any(|i| last_segment(i) == marker)
    }
}

impl Rule for AggregateRootInterface {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires aggregate roots to implement the aggregate-root marker interface"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn adr_path(&self) -> &'static str {
        ADR
    }

    fn is_applicable(&self, ty: &TypeContext<'_>) -> bool {
        ty.is_concrete_entity() && has_suffix(ty.name(), &self.suffix)
    }

    fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict {
        if self.implements_marker(&ty.decl.interfaces) {
            return Verdict::Pass;
        }

        Verdict::Fail(
            Finding::new(
                format!(
                    "Aggregate root `{}` does not implement `{}`",
                    ty.name(),
                    self.interface
                ),
                format!(
                    "Add `{}` to the interface list of `{}`",
                    self.interface,
                    ty.name()
                ),
            )
            .at(ty.location()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abstract_entity, check, concrete_entity};
    use entity_lint_core::{Config, TypeDecl};

    #[test]
    fn test_passes_with_marker() {
        let ty = concrete_entity("OrderAggregateRoot").implements("IAggregateRoot");
        assert!(check(&AggregateRootInterface::new(), ty).is_none());
    }

    #[test]
    fn test_matches_qualified_and_generic_marker() {
        let ty = concrete_entity("OrderAggregateRoot")
            .implements("Shop.Kernel.IAggregateRoot<OrderAggregateRoot>");
        assert!(check(&AggregateRootInterface::new(), ty).is_none());
    }

    #[test]
    fn test_fails_without_marker() {
        let ty = concrete_entity("OrderAggregateRoot").implements("IAuditable");
        let violation = check(&AggregateRootInterface::new(), ty).expect("should fail");
        assert!(violation.message.contains("IAggregateRoot"));
        assert_eq!(
            violation.llm_hint,
            "Add `IAggregateRoot` to the interface list of `OrderAggregateRoot`"
        );
    }

    #[test]
    fn test_not_applicable_outside_concrete_roots() {
        let rule = AggregateRootInterface::new();
        assert!(check(&rule, concrete_entity("OrderLine")).is_none());
        assert!(check(&rule, abstract_entity("BaseAggregateRoot")).is_none());
        assert!(check(&rule, TypeDecl::class("ReportAggregateRoot")).is_none());
    }

    #[test]
    fn test_from_config_overrides_suffix_and_interface() {
        let config = Config::parse(
            r#"
[rules.DE005]
suffix = "Root"
interface = "Shop.IRoot"
"#,
        )
        .expect("config");
        let rule = AggregateRootInterface::from_config(config.rule(NAME, CODE));
        assert_eq!(rule.suffix, "Root");

        let violation = check(&rule, concrete_entity("BasketRoot")).expect("should fail");
        assert_eq!(violation.message, "Aggregate root `BasketRoot` does not implement `Shop.IRoot`");
        assert!(check(&rule, concrete_entity("BasketRoot").implements("IRoot")).is_none());
    }
}
