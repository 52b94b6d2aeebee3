//! Conformance gate for `cargo test` integration.

use entity_lint_core::{
    snapshot, Analyzer, AnalyzerError, Config, ConfigError, ConfigSource, ConformanceReport,
    Severity, SnapshotError,
};
use entity_lint_rules::Preset;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that prevent a conformance check from producing a report.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The snapshot directory could not be loaded.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The analyzer could not be built.
    #[error(transparent)]
    Analyzer(#[from] AnalyzerError),

    /// The configured preset does not exist.
    #[error("unknown preset `{0}`. Valid presets: recommended, strict, minimal")]
    UnknownPreset(String),
}

/// Runs the configured catalog over a snapshot directory.
///
/// Relative paths resolve against `CARGO_MANIFEST_DIR` when it is set.
/// Without `config_path` the configuration is located with
/// [`ConfigSource::locate`], as the CLI does.
///
/// # Errors
///
/// Returns an error if the configuration, the snapshots or the analyzer
/// cannot be loaded. Violations are part of the report, never errors.
pub fn check(
    snapshot_dir: &Path,
    config_path: Option<&Path>,
) -> Result<ConformanceReport, CheckError> {
    evaluate(snapshot_dir, config_path).map(|(report, _)| report)
}

/// Runs entity-lint as part of `cargo test`.
///
/// `fail_on` overrides the configured gate threshold.
///
/// # Panics
///
/// Panics with a formatted report if violations at or above the threshold
/// are found, or if the check cannot run.
pub fn run_check(
    snapshot_dir: impl AsRef<Path>,
    config_path: Option<&Path>,
    fail_on: Option<Severity>,
) {
    let (report, configured) = evaluate(snapshot_dir.as_ref(), config_path)
        .unwrap_or_else(|e| panic!("entity-lint: {e}"));
    let threshold = fail_on.unwrap_or(configured);

    if report.has_violations_at(threshold) {
        panic!("{}", report.format_test_report(threshold));
    }
}

fn evaluate(
    snapshot_dir: &Path,
    config_path: Option<&Path>,
) -> Result<(ConformanceReport, Severity), CheckError> {
    let root = resolve(snapshot_dir);
    let explicit = config_path.map(resolve);
    let config = ConfigSource::locate(&root, explicit.as_deref()).load()?;
    let preset = resolve_preset(&config)?;
    let fail_on = config.fail_on();

    let modules = snapshot::load_modules(&root, &config.analyzer.exclude)?;
    let analyzer = Analyzer::builder()
        .rules(preset.configured(&config))
        .config(config)
        .build()?;

    tracing::debug!(
        "Running {} preset with {} rules over {}",
        preset.name(),
        analyzer.rule_count(),
        root.display()
    );
    Ok((analyzer.analyze(&modules), fail_on))
}

fn resolve_preset(config: &Config) -> Result<Preset, CheckError> {
    match config.preset.as_deref() {
        None => Ok(Preset::Recommended),
        Some(name) => {
            Preset::parse(name).ok_or_else(|| CheckError::UnknownPreset(name.to_string()))
        }
    }
}

fn resolve(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::var_os("CARGO_MANIFEST_DIR") {
        Some(dir) => PathBuf::from(dir).join(path),
        None => path.to_path_buf(),
    }
}
