//! Loading symbol snapshots produced by a compiler front-end.
//!
//! A snapshot directory holds one JSON-serialized [`SymbolModel`] per module.
//! The module identifier is the snapshot's `module` field, falling back to the
//! file stem. Malformed input is reported here, before any rule runs.

use crate::model::{ModuleSet, SymbolModel};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the JSON conformance report. Never loaded as a snapshot.
pub const REPORT_FILE: &str = "entity-lint-report.json";

/// Errors raised while materializing symbol models.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// IO error reading a snapshot.
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A snapshot is not a valid symbol model.
    #[error("Malformed snapshot {path}: {message}")]
    Parse {
        /// Snapshot path.
        path: PathBuf,
        /// Deserializer message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Two snapshots claim the same module identifier.
    #[error("Module `{module}` is defined by both {first} and {second}")]
    DuplicateModule {
        /// Module identifier.
        module: String,
        /// First snapshot.
        first: PathBuf,
        /// Second snapshot.
        second: PathBuf,
    },
}

/// Reads one snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a symbol model.
pub fn load_model(path: &Path) -> Result<SymbolModel, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SnapshotError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads every `*.json` snapshot below `dir`, skipping excluded paths.
///
/// # Errors
///
/// Returns the first read, parse or duplicate-module error.
pub fn load_modules(dir: &Path, exclude: &[String]) -> Result<ModuleSet, SnapshotError> {
    info!("Loading symbol snapshots from {}", dir.display());

    let excludes = exclude
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    let pattern = format!("{}/**/*.json", dir.display());
    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry.map_err(|e| SnapshotError::Io {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.file_name().is_some_and(|n| n == REPORT_FILE) {
            debug!("Skipping report: {}", path.display());
            continue;
        }
        if is_excluded(dir, &path, exclude, &excludes) {
            debug!("Excluding: {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort();

    let mut modules = ModuleSet::new();
    let mut sources: Vec<(String, PathBuf)> = Vec::new();
    for path in files {
        let model = load_model(&path)?;
        let module = model.module.clone().unwrap_or_else(|| module_name(&path));

        if let Some((_, first)) = sources.iter().find(|(m, _)| *m == module) {
            return Err(SnapshotError::DuplicateModule {
                module,
                first: first.clone(),
                second: path,
            });
        }
        debug!("Loaded module {} from {}", module, path.display());
        sources.push((module.clone(), path));
        modules.insert(module, model);
    }

    info!("Loaded {} module(s)", modules.len());
    Ok(modules)
}

fn is_excluded(dir: &Path, path: &Path, raw: &[String], compiled: &[glob::Pattern]) -> bool {
    // Patterns only see the part below the snapshot directory.
    let relative = path.strip_prefix(dir).unwrap_or(path);
    if compiled.iter().any(|p| p.matches_path(relative)) {
        return true;
    }

    // Also check as substring for patterns like "**/generated/**"
    let rooted = format!("/{}", relative.to_string_lossy());
    raw.iter().any(|pattern| {
        let normalized = pattern.replace("**", "");
        !normalized.is_empty() && normalized != "/" && rooted.contains(&normalized)
    })
}

fn module_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).expect("write snapshot");
    }

    #[test]
    fn loads_modules_by_field_or_file_stem() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "billing.json", r#"{ "types": [] }"#);
        write(
            dir.path(),
            "shop.json",
            r#"{ "module": "Shop.Domain", "types": [{ "name": "Order", "kind": "class" }] }"#,
        );

        let modules = load_modules(dir.path(), &[]).expect("load");
        let names: Vec<&str> = modules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Shop.Domain", "billing"]);
        assert_eq!(modules["Shop.Domain"].types[0].name, "Order");
    }

    #[test]
    fn exclude_patterns_skip_snapshots() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("generated")).expect("mkdir");
        write(dir.path(), "shop.json", r#"{ "types": [] }"#);
        write(&dir.path().join("generated"), "noise.json", r#"{ "types": [] }"#);

        let modules = load_modules(dir.path(), &["**/generated/**".to_string()]).expect("load");
        assert_eq!(modules.len(), 1);
        assert!(modules.contains_key("shop"));
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "broken.json", r#"{ "types": [{ "name": "Order" }] }"#);

        let err = load_modules(dir.path(), &[]).expect_err("missing kind should fail");
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn excludes_ignore_ancestors_of_the_snapshot_dir() {
        let root = tempfile::tempdir().expect("tempdir");
        let dir = root.path().join("legacy").join("snapshots");
        std::fs::create_dir_all(&dir).expect("mkdir");
        write(&dir, "shop.json", r#"{ "types": [] }"#);

        let exclude = vec!["legacy".to_string(), "**/legacy/**".to_string()];
        let modules = load_modules(&dir, &exclude).expect("load");
        assert_eq!(modules.len(), 1);
    }

    #[test]
    fn report_file_is_not_a_module() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "shop.json", r#"{ "module": "Shop", "types": [] }"#);
        write(
            dir.path(),
            REPORT_FILE,
            r#"{ "tool": "entity-lint", "rules": [], "modules_checked": 1, "types_checked": 0 }"#,
        );

        let modules = load_modules(dir.path(), &[]).expect("load");
        let names: Vec<&str> = modules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Shop"]);
    }

    #[test]
    fn foreign_json_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "settings.json", r#"{ "editor.tabSize": 4 }"#);
        let err = load_modules(dir.path(), &[]).expect_err("unknown fields should fail");
        assert!(matches!(err, SnapshotError::Parse { .. }));

        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "empty.json", r#"{ "module": "Shop" }"#);
        let err = load_modules(dir.path(), &[]).expect_err("missing types should fail");
        assert!(err.to_string().contains("empty.json"));
    }

    #[test]
    fn duplicate_module_ids_are_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "a.json", r#"{ "module": "Shop", "types": [] }"#);
        write(dir.path(), "b.json", r#"{ "module": "Shop", "types": [] }"#);

        let err = load_modules(dir.path(), &[]).expect_err("duplicate should fail");
        assert!(matches!(err, SnapshotError::DuplicateModule { ref module, .. } if module == "Shop"));
    }
}
