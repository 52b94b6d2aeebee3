//! Rule presets for common configurations.

use crate::catalog::build_rules;
use crate::{aggregate_root_interface, max_inheritance_depth, no_external_dependencies};
use entity_lint_core::{Config, RuleBox, Severity};

/// Rule codes of the minimal preset.
const MINIMAL: &[&str] = &[
    aggregate_root_interface::CODE,
    no_external_dependencies::CODE,
    max_inheritance_depth::CODE,
];

/// Preset configurations for entity-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule at its default severity.
    Recommended,
    /// Every rule at error severity.
    Strict,
    /// Structural rules only, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Parses a preset name (case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Returns the preset name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        self.configured(&Config::default())
    }

    /// Returns the rules for this preset with options read from `config`.
    #[must_use]
    pub fn configured(self, config: &Config) -> Vec<RuleBox> {
        match self {
            Self::Recommended => build_rules(config, None),
            Self::Strict => build_rules(config, Some(Severity::Error)),
            Self::Minimal => build_rules(config, None)
                .into_iter()
                .filter(|r| MINIMAL.contains(&r.code()))
                .collect(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes every rule: `DE001`-`DE011` at error, `EN001`-`EN003` at warning.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    Preset::Recommended.rules()
}

/// Returns the strict set of rules.
///
/// Same rules as recommended, every one at error severity.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    Preset::Strict.rules()
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes:
/// - `DE005` aggregate-root marker interface
/// - `DE006` no external dependencies
/// - `DE010` maximum inheritance depth
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    Preset::Minimal.rules()
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    build_rules(&Config::default(), None)
}
