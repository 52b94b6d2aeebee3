//! The ordered rule catalog.

use crate::presets::Preset;
use crate::{
    aggregate_root_interface, max_inheritance_depth, no_create_from_existing_info,
    no_enum_suffix, one_by_one_child_processing, zero_value_is_none, AggregateRootInterface,
    MaxInheritanceDepth, MetadataForValidation, MinimalUnderlyingType, NoCreateFromExistingInfo,
    NoEnumSuffix, NoExternalDependencies, NoPublicInstanceMethods, OneByOneChildProcessing,
    PrivateSetMethods, ProtectedConstructors, ProtectedInternalMethods,
    PublicStaticValidateMethods, ZeroValueIsNone,
};
use entity_lint_core::{Config, Rule, RuleBox, Severity};
use std::fmt;
use tracing::{debug, warn};

/// Builds every rule in catalog order, reading rule options from `config`.
///
/// When `severity` is set it replaces each rule's default severity.
pub(crate) fn build_rules(config: &Config, severity: Option<Severity>) -> Vec<RuleBox> {
    macro_rules! rule {
        ($rule:expr) => {{
            let rule = $rule;
            let rule = match severity {
                Some(severity) => rule.severity(severity),
                None => rule,
            };
            Box::new(rule) as RuleBox
        }};
    }

    vec![
        rule!(PrivateSetMethods::new()),
        rule!(PublicStaticValidateMethods::new()),
        rule!(ProtectedInternalMethods::new()),
        rule!(NoPublicInstanceMethods::new()),
        rule!(AggregateRootInterface::from_config(config.rule(
            aggregate_root_interface::NAME,
            aggregate_root_interface::CODE
        ))),
        rule!(NoExternalDependencies::new()),
        rule!(OneByOneChildProcessing::from_config(config.rule(
            one_by_one_child_processing::NAME,
            one_by_one_child_processing::CODE
        ))),
        rule!(ProtectedConstructors::new()),
        rule!(MetadataForValidation::new()),
        rule!(MaxInheritanceDepth::from_config(config.rule(
            max_inheritance_depth::NAME,
            max_inheritance_depth::CODE
        ))),
        rule!(NoCreateFromExistingInfo::from_config(config.rule(
            no_create_from_existing_info::NAME,
            no_create_from_existing_info::CODE
        ))),
        rule!(NoEnumSuffix::from_config(
            config.rule(no_enum_suffix::NAME, no_enum_suffix::CODE)
        )),
        rule!(MinimalUnderlyingType::new()),
        rule!(ZeroValueIsNone::from_config(
            config.rule(zero_value_is_none::NAME, zero_value_is_none::CODE)
        )),
    ]
}

/// Builds the rules selected by the configuration's preset, with rule
/// options applied.
///
/// An unknown preset name falls back to [`Preset::Recommended`].
#[must_use]
pub fn rules_from_config(config: &Config) -> Vec<RuleBox> {
    let preset = match config.preset.as_deref() {
        Some(name) => Preset::parse(name).unwrap_or_else(|| {
            warn!("Unknown preset `{name}`, using recommended");
            Preset::Recommended
        }),
        None => Preset::Recommended,
    };
    debug!("Building rules for preset {}", preset.name());
    preset.configured(config)
}

/// Ordered collection of rules, addressable by name or code.
pub struct Catalog {
    rules: Vec<RuleBox>,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::all()
    }
}

impl Catalog {
    /// Creates a catalog from rules, keeping their order.
    #[must_use]
    pub fn new(rules: Vec<RuleBox>) -> Self {
        Self { rules }
    }

    /// The full catalog with default options.
    #[must_use]
    pub fn all() -> Self {
        Self::new(build_rules(&Config::default(), None))
    }

    /// The catalog selected by a configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(rules_from_config(config))
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates rules in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Rule + 'static)> {
        self.rules.iter().map(|r| &**r)
    }

    /// Rule names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name())
    }

    /// Looks a rule up by name (`DE005_AggregateRootInterface`) or code
    /// (`DE005`).
    #[must_use]
    pub fn get(&self, name_or_code: &str) -> Option<&(dyn Rule + 'static)> {
        self.iter()
            .find(|r| r.name() == name_or_code || r.code() == name_or_code)
    }

    /// Keeps only the listed rules (by name or code), in catalog order.
    #[must_use]
    pub fn select<S: AsRef<str>>(self, wanted: &[S]) -> Self {
        for w in wanted {
            let w = w.as_ref();
            if !self.rules.iter().any(|r| r.name() == w || r.code() == w) {
                warn!("Unknown rule: {w}");
            }
        }

        let rules = self
            .rules
            .into_iter()
            .filter(|r| {
                wanted
                    .iter()
                    .any(|w| r.name() == w.as_ref() || r.code() == w.as_ref())
            })
            .collect();
        Self { rules }
    }

    /// Consumes the catalog into its rules.
    #[must_use]
    pub fn into_rules(self) -> Vec<RuleBox> {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_lookup() {
        let catalog = Catalog::all();
        assert_eq!(catalog.len(), 14);
        assert_eq!(catalog.names().next(), Some("DE001_PrivateSetMethods"));
        assert_eq!(catalog.names().last(), Some("EN003_ZeroValueIsNone"));

        let by_code = catalog.get("DE010").expect("DE010");
        assert_eq!(by_code.name(), "DE010_MaxInheritanceDepth");
        assert!(catalog.get("EN001_NoEnumSuffix").is_some());
        assert!(catalog.get("XX999").is_none());
    }

    #[test]
    fn test_names_and_codes_are_unique() {
        let catalog = Catalog::all();
        let mut codes: Vec<&str> = catalog.iter().map(|r| r.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), catalog.len());

        for rule in catalog.iter() {
            assert!(rule.name().starts_with(rule.code()));
            assert!(rule.adr_path().starts_with("docs/adr/"));
            assert!(!rule.description().is_empty());
        }
    }

    #[test]
    fn test_select_keeps_catalog_order() {
        let catalog = Catalog::all().select(&["EN002", "DE005_AggregateRootInterface", "nope"]);
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            vec!["DE005_AggregateRootInterface", "EN002_MinimalUnderlyingType"]
        );
    }

    #[test]
    fn test_rules_from_config_applies_options_and_preset() {
        let config = Config::parse(
            r#"
preset = "minimal"

[rules.DE010]
max_depth = 3
"#,
        )
        .expect("config");
        let catalog = Catalog::from_config(&config);
        let codes: Vec<&str> = catalog.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["DE005", "DE006", "DE010"]);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_recommended() {
        let config = Config::parse("preset = \"paranoid\"\n").expect("config");
        assert_eq!(rules_from_config(&config).len(), 14);
    }
}
