//! Rule limiting abstract levels between a concrete entity and the entity
//! root.
//!
//! # Rationale
//!
//! Deep entity hierarchies spread invariants over several base classes and
//! make persistence mappings brittle. One shared abstract level (e.g.
//! `AuditableEntity<T>`) is allowed by default.
//!
//! # Configuration
//!
//! - `max_depth`: allowed intermediate abstract levels (default: 1)

use entity_lint_core::{EntityShape, Finding, Rule, RuleConfig, Severity, TypeContext, Verdict};

/// Rule code for max-inheritance-depth.
pub const CODE: &str = "DE010";

/// Rule name for max-inheritance-depth.
pub const NAME: &str = "DE010_MaxInheritanceDepth";

/// Decision record for max-inheritance-depth.
pub const ADR: &str = "docs/adr/0010-shallow-entity-hierarchies.md";

/// Limits intermediate abstract levels below the entity root.
#[derive(Debug, Clone)]
pub struct MaxInheritanceDepth {
    /// Maximum allowed intermediate abstract levels.
    pub max_depth: usize,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MaxInheritanceDepth {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxInheritanceDepth {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: 1,
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let rule = Self::new();
        match config.and_then(|c| c.get_option::<usize>("max_depth")) {
            Some(max_depth) => rule.max_depth(max_depth),
            None => rule,
        }
    }

    /// Sets the maximum depth.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for MaxInheritanceDepth {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Limits abstract levels between a concrete entity and the entity root"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn adr_path(&self) -> &'static str {
        ADR
    }

    fn is_applicable(&self, ty: &TypeContext<'_>) -> bool {
        ty.is_concrete_entity()
    }

    fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict {
        let EntityShape::Entity {
            root_index,
            intermediate_depth,
            ..
        } = ty.shape
        else {
            return Verdict::Pass;
        };
        if intermediate_depth <= self.max_depth {
            return Verdict::Pass;
        }

        let root = ty
            .decl
            .base_types
            .get(root_index)
            .map_or("the entity root", |b| b.name.as_str());

        Verdict::Fail(
            Finding::new(
                format!(
                    "Entity `{}` has inheritance depth {intermediate_depth} (max: {})",
                    ty.name(),
                    self.max_depth
                ),
                format!(
                    "Collapse {} abstract level(s) between `{}` and `{root}`",
                    intermediate_depth - self.max_depth,
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
    use crate::test_support::check;
    use entity_lint_core::{BaseType, TypeDecl};

    fn entity_with_levels(levels: &[&str]) -> TypeDecl {
        levels
            .iter()
            .fold(TypeDecl::class("Invoice").sealed(), |ty, level| {
                ty.extends(BaseType::new(*level).abstract_())
            })
            .extends(BaseType::self_bound("Entity"))
    }

    #[test]
    fn test_two_levels_fail_with_depth() {
        let ty = entity_with_levels(&["BillingDocument", "AuditableEntity"]);
        let violation = check(&MaxInheritanceDepth::new(), ty).expect("should fail");
        assert_eq!(violation.message, "Entity `Invoice` has inheritance depth 2 (max: 1)");
        assert_eq!(
            violation.llm_hint,
            "Collapse 1 abstract level(s) between `Invoice` and `Entity`"
        );
    }

    #[test]
    fn test_one_level_passes() {
        let ty = entity_with_levels(&["AuditableEntity"]);
        assert!(check(&MaxInheritanceDepth::new(), ty).is_none());
    }

    #[test]
    fn test_configured_depth() {
        let ty = entity_with_levels(&["BillingDocument", "AuditableEntity"]);
        assert!(check(&MaxInheritanceDepth::new().max_depth(2), ty.clone()).is_none());
        assert!(check(&MaxInheritanceDepth::new().max_depth(0), ty).is_some());
    }
}
