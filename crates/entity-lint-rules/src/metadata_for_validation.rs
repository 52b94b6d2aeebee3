//! Rule requiring a nested `{Type}Metadata` type when validation exists.
//!
//! Validation limits (lengths, ranges) live in the nested metadata type so
//! that UI and API layers can read them without calling into the entity.

use entity_lint_core::utils::names::is_validation;
use entity_lint_core::{Finding, Rule, Severity, TypeContext, Verdict};

/// Rule code for metadata-for-validation.
pub const CODE: &str = "DE009";

/// Rule name for metadata-for-validation.
pub const NAME: &str = "DE009_MetadataForValidation";

/// Decision record for metadata-for-validation.
pub const ADR: &str = "docs/adr/0009-validation-metadata.md";

/// Requires `{Type}Metadata` on abstract entities that declare validation.
#[derive(Debug, Clone)]
pub struct MetadataForValidation {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MetadataForValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataForValidation {
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

impl Rule for MetadataForValidation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a nested `{Type}Metadata` type on abstract entities with validation methods"
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
        let Some(first_validation) = ty.decl.methods().find(|m| is_validation(&m.name)) else {
            return Verdict::Pass;
        };

        let expected = format!("{}Metadata", ty.name());
        if ty.decl.declares_nested(&expected) {
            return Verdict::Pass;
        }

        Verdict::Fail(
            Finding::new(
                format!(
                    "Abstract entity `{}` declares `{}` but no nested `{expected}` type",
                    ty.name(),
                    first_validation.name
                ),
                format!(
                    "Declare a nested `{expected}` type in `{}` holding the validation limits",
                    ty.name()
                ),
            )
            .at(ty.location()),
        )
    }
}
