//! Rule requiring one-by-one processing methods for child entity collections.
//!
//! # Rationale
//!
//! A concrete entity that owns an ordered collection of child entities must
//! route every change to a child through a single `Process{Child}Internal`
//! method, so invariants spanning the collection are enforced in one place.
//!
//! # Configuration
//!
//! - `collections`: generic collection names that count as ordered
//!   collections (default: the list, collection and immutable-list family)

use entity_lint_core::utils::last_segment;
use entity_lint_core::{Finding, Member, Rule, RuleConfig, Severity, TypeContext, TypeRef, Verdict};

/// Rule code for one-by-one-child-processing.
pub const CODE: &str = "DE007";

/// Rule name for one-by-one-child-processing.
pub const NAME: &str = "DE007_OneByOneChildProcessing";

/// Decision record for one-by-one-child-processing.
pub const ADR: &str = "docs/adr/0007-one-by-one-child-processing.md";

/// Ordered collection types recognized by default.
const DEFAULT_COLLECTIONS: &[&str] = &[
    "List",
    "IList",
    "IReadOnlyList",
    "ICollection",
    "IReadOnlyCollection",
    "Collection",
    "ReadOnlyCollection",
    "ImmutableList",
];

/// Requires `Process{Child}Internal` for each child entity collection.
#[derive(Debug, Clone)]
pub struct OneByOneChildProcessing {
    /// Ordered collection type names.
    pub collections: Vec<String>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OneByOneChildProcessing {
    fn default() -> Self {
        Self::new()
    }
}

impl OneByOneChildProcessing {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            collections: DEFAULT_COLLECTIONS.iter().map(|s| (*s).to_string()).collect(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its configuration section.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let collections = config
            .map(|c| c.get_str_array("collections"))
            .unwrap_or_default();
        if collections.is_empty() {
            Self::new()
        } else {
            Self::new().collections(collections)
        }
    }

    /// Replaces the recognized collection type names.
    #[must_use]
    pub fn collections<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections = collections.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Child entity held by an ordered collection field, if any.
    fn child_entity<'t>(&self, ty: &TypeContext<'_>, field_type: &'t TypeRef) -> Option<&'t TypeRef> {
        let collection = last_segment(&field_type.name);
        if !self.collections.iter().any(|c| c == collection) {
            return None;
        }
        match field_type.arguments.as_slice() {
            [child] if ty.is_entity(child) && last_segment(&child.name) != ty.name() => Some(child),
            _ => None,
        }
    }

    fn missing_processor(&self, ty: &TypeContext<'_>, field: &Member) -> Option<Finding> {
        let field_type = field.declared_type.as_ref()?;
        let child = last_segment(&self.child_entity(ty, field_type)?.name);
        let expected = format!("Process{child}Internal");

        if ty.decl.methods().any(|m| m.name == expected) {
            return None;
        }

        Some(
            Finding::new(
                format!(
                    "Entity `{}` holds `{}` in field `{}` but declares no `{expected}` method \
                     (pattern `Process<Child>Internal`)",
                    ty.name(),
                    field_type.display_name(),
                    field.name
                ),
                format!(
                    "Add a protected `{expected}` method to `{}` that applies changes to one `{child}` at a time",
                    ty.name()
                ),
            )
            .at(field.location.as_ref())
            .at(ty.location()),
        )
    }
}

impl Rule for OneByOneChildProcessing {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires a `Process<Child>Internal` method for each child entity collection"
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
            .find_map(|f| self.missing_processor(ty, f))
            .into()
    }
}
