//! Check command implementation.

use anyhow::{Context, Result};
use entity_lint_core::{snapshot, Analyzer, Config, ConfigSource};
use entity_lint_rules::Catalog;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

pub use entity_lint_core::snapshot::REPORT_FILE;

/// Options of the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Directory receiving the JSON report.
    pub output: Option<PathBuf>,
    /// Console output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules: Option<String>,
    /// Extra snapshot exclude patterns.
    pub exclude: Vec<String>,
    /// Preset overriding the configuration.
    pub preset: Option<String>,
}

/// Loads the configuration a [`ConfigSource`] points at.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    if let ConfigSource::Global(path) = source {
        tracing::info!("Using global config: {}", path.display());
    }
    source.load().with_context(|| match source.path() {
        Some(path) => format!("Failed to load config: {}", path.display()),
        None => "Failed to load default config".to_string(),
    })
}

/// Runs the check command.
///
/// Returns `false` when violations reach the configured `fail_on` severity.
pub fn run(path: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<bool> {
    let mut config = load_config(source)?;
    if let Some(preset) = &options.preset {
        config.preset = Some(preset.clone());
    }
    config.analyzer.exclude.extend(options.exclude.iter().cloned());

    let modules = snapshot::load_modules(path, &config.analyzer.exclude)
        .with_context(|| format!("Failed to load snapshots from {}", path.display()))?;

    let mut catalog = Catalog::from_config(&config);
    if let Some(filter) = &options.rules {
        let names: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        catalog = catalog.select(&names);
    }

    let fail_on = config.fail_on();
    let analyzer = Analyzer::builder()
        .config(config)
        .rules(catalog.into_rules())
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rules",
        path.display(),
        analyzer.rule_count()
    );

    let report = analyzer.analyze(&modules);

    super::output::print(&report, options.format)?;

    if let Some(dir) = &options.output {
        let written = super::output::write_report(&report, dir)?;
        tracing::info!("Report written to {}", written.display());
    }

    Ok(!report.has_violations_at(fail_on))
}
