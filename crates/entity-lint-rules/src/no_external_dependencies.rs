//! Rule forbidding concrete entities from holding interface-typed instance
//! fields.
//!
//! # Rationale
//!
//! An entity holding a service (`IClock`, `IRepository<T>`) is bound to
//! infrastructure and cannot be materialized from persistence alone. Services
//! are passed to the operation that needs them instead.
//!
//! # Allowed Patterns
//!
//! - Static fields (shared constants, caches)
//! - Fields typed as classes, structs or enums

use entity_lint_core::{Finding, Rule, Severity, TypeContext, Verdict};

/// Rule code for no-external-dependencies.
pub const CODE: &str = "DE006";

/// Rule name for no-external-dependencies.
pub const NAME: &str = "DE006_NoExternalDependencies";

/// Decision record for no-external-dependencies.
pub const ADR: &str = "docs/adr/0006-no-external-dependencies.md";

/// Forbids interface-typed instance fields on concrete entities.
#[derive(Debug, Clone)]
pub struct NoExternalDependencies {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoExternalDependencies {
    fn default() -> Self {
        Self::new()
    }
}

impl NoExternalDependencies {
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

impl Rule for NoExternalDependencies {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids interface-typed instance fields on concrete entities"
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
        ty.decl
            .fields()
            .filter(|f| !f.is_static)
            .find_map(|f| {
                let field_type = f.declared_type.as_ref()?;
                ty.is_interface(field_type).then(|| {
                    let type_name = field_type.display_name();
                    Finding::new(
                        format!(
                            "Entity `{}` depends on interface `{type_name}` through field `{}`",
                            ty.name(),
                            f.name
                        ),
                        format!(
                            "Remove field `{}` from `{}` and pass `{type_name}` to the method that needs it",
                            f.name,
                            ty.name()
                        ),
                    )
                    .at(f.location.as_ref())
                    .at(ty.location())
                })
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, check_with, concrete_entity};
    use entity_lint_core::{Accessibility, Member, TypeDecl, TypeRef};

    #[test]
    fn test_detects_interface_field() {
        let ty = concrete_entity("Order").with_member(Member::field(
            "_clock",
            Accessibility::Private,
            TypeRef::interface("IClock"),
        ));
        let violation = check(&NoExternalDependencies::new(), ty).expect("should fail");
        assert_eq!(
            violation.message,
            "Entity `Order` depends on interface `IClock` through field `_clock`"
        );
    }

    #[test]
    fn test_static_interface_field_is_exempt() {
        let ty = concrete_entity("Order").with_member(
            Member::field("Clock", Accessibility::Private, TypeRef::interface("IClock")).static_(),
        );
        assert!(check(&NoExternalDependencies::new(), ty).is_none());
    }

    #[test]
    fn test_resolves_unannotated_field_types_through_index() {
        let ty = concrete_entity("Order").with_member(Member::field(
            "_repository",
            Accessibility::Private,
            TypeRef::generic("IRepository", vec![TypeRef::named("Order")]),
        ));
        let others = vec![TypeDecl::interface("IRepository").in_namespace("Shop.Data")];

        let violation =
            check_with(&NoExternalDependencies::new(), ty, others).expect("should fail");
        assert!(violation.message.contains("`IRepository<Order>`"));
    }

    #[test]
    fn test_allows_value_fields() {
        let ty = concrete_entity("Order")
            .with_member(Member::field("_total", Accessibility::Private, TypeRef::named("decimal")))
            .with_member(Member::field(
                "_lines",
                Accessibility::Private,
                TypeRef::generic("List", vec![TypeRef::named("OrderLine")]),
            ));
        assert!(check(&NoExternalDependencies::new(), ty).is_none());
    }
}
