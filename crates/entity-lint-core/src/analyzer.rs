//! Core analyzer for orchestrating rule evaluation.

use crate::classifier::{SymbolIndex, TypeContext};
use crate::config::Config;
use crate::model::ModuleSet;
use crate::result::{ConformanceReport, ProjectAnalysisResult, RuleReport, TypeAnalysisResult};
use crate::rule::{Finding, Rule, RuleBox, Verdict};
use crate::types::{Severity, Violation};

use rayon::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building an analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The dedicated worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
    parallelism: Option<usize>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the number of worker threads (overrides the configuration).
    #[must_use]
    pub fn parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if a dedicated worker pool was requested and could
    /// not be created.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        let threads = self.parallelism.or(config.analyzer.parallelism);

        let pool = match threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };

        Ok(Analyzer {
            rules: self.rules,
            config,
            pool,
        })
    }
}

/// The main analyzer that orchestrates rule × module × type evaluation.
///
/// Use [`Analyzer::builder()`] to construct an instance.
#[derive(Default)]
pub struct Analyzer {
    rules: Vec<RuleBox>,
    config: Config,
    pool: Option<rayon::ThreadPool>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs one rule over every module.
    ///
    /// Each module yields a [`ProjectAnalysisResult`] listing its declared
    /// types (nested types included) in declaration order. Types the rule does
    /// not apply to are recorded as passed without being evaluated.
    pub fn analyze_rule<R: Rule + ?Sized>(
        &self,
        rule: &R,
        modules: &ModuleSet,
    ) -> BTreeMap<String, ProjectAnalysisResult> {
        let index = SymbolIndex::build(modules);
        self.install(|| self.run_rule(rule, &index))
    }

    /// Runs every registered rule and aggregates a [`ConformanceReport`].
    ///
    /// Rules disabled in the configuration are skipped. Severity overrides and
    /// per-rule allow-lists from the configuration are applied.
    #[must_use]
    pub fn analyze(&self, modules: &ModuleSet) -> ConformanceReport {
        info!(
            "Starting analysis of {} module(s) with {} rule(s)",
            modules.len(),
            self.rules.len()
        );

        let index = SymbolIndex::build(modules);
        let mut report = ConformanceReport {
            rules: Vec::new(),
            modules_checked: modules.len(),
            types_checked: index.len(),
        };

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name(), rule.code()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            debug!("Running rule: {}", rule.name());
            let results = self.install(|| self.run_rule(&**rule, &index));
            report.rules.push(RuleReport {
                rule: rule.name().to_string(),
                code: rule.code().to_string(),
                description: rule.description().to_string(),
                adr: rule.adr_path().to_string(),
                results,
            });
        }

        info!(
            "Analysis complete: {} violation(s) in {} type(s)",
            report.violations().count(),
            report.types_checked
        );

        report
    }

    fn install<T: Send>(&self, op: impl FnOnce() -> T + Send) -> T {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    fn run_rule<R: Rule + ?Sized>(
        &self,
        rule: &R,
        index: &SymbolIndex<'_>,
    ) -> BTreeMap<String, ProjectAnalysisResult> {
        let modules: Vec<&str> = index.modules().collect();

        modules
            .par_iter()
            .map(|module| {
                let type_results = index
                    .module_types(module)
                    .par_iter()
                    .map(|ty| self.evaluate_type(rule, ty))
                    .collect();
                (
                    (*module).to_string(),
                    ProjectAnalysisResult {
                        project_name: (*module).to_string(),
                        type_results,
                    },
                )
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    fn evaluate_type<R: Rule + ?Sized>(&self, rule: &R, ty: &TypeContext<'_>) -> TypeAnalysisResult {
        if !rule.is_applicable(ty) {
            return TypeAnalysisResult::passed(ty.qualified_name);
        }
        if self
            .config
            .is_type_allowed(rule.name(), rule.code(), ty.qualified_name)
        {
            debug!("{} allow-listed for {}", ty.qualified_name, rule.name());
            return TypeAnalysisResult::passed(ty.qualified_name);
        }

        match rule.evaluate(ty) {
            Verdict::Pass => TypeAnalysisResult::passed(ty.qualified_name),
            Verdict::Fail(finding) => {
                let severity = self
                    .config
                    .rule_severity(rule.name(), rule.code())
                    .unwrap_or_else(|| rule.default_severity());
                TypeAnalysisResult::failed(
                    ty.qualified_name,
                    assemble_violation(rule, severity, finding),
                )
            }
        }
    }
}

/// Builds the violation for a failing verdict.
///
/// Rule name and ADR path always come from the rule itself.
fn assemble_violation<R: Rule + ?Sized>(rule: &R, severity: Severity, finding: Finding) -> Violation {
    Violation {
        rule: rule.name().to_string(),
        severity,
        message: finding.message,
        adr: rule.adr_path().to_string(),
        llm_hint: finding.llm_hint,
        location: finding.location,
    }
}
