//! Locating the configuration for a snapshot directory.
//!
//! A snapshot directory is checked together with its configuration: the
//! front-end exports `*.json` snapshots and the team commits an
//! `entity-lint.toml` next to them. Lookup order:
//!
//! 1. an explicit path (`--config`, `run_check(.., Some(path), ..)`)
//! 2. `entity-lint.toml`, then `.entity-lint.toml`, in the snapshot directory
//! 3. `config.toml` in the global directory (see [`global_config_dir`])
//! 4. built-in defaults

use super::{Config, ConfigError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names accepted inside a snapshot directory, in priority order.
pub const SNAPSHOT_CONFIG_NAMES: &[&str] = &["entity-lint.toml", ".entity-lint.toml"];

/// Environment variable overriding the global config directory.
pub const CONFIG_DIR_ENV: &str = "ENTITY_LINT_CONFIG_DIR";

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Where the configuration of a check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given by the caller; it must exist.
    Explicit(PathBuf),
    /// Committed next to the snapshots.
    SnapshotDir(PathBuf),
    /// Shared per-user configuration.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// Locates the configuration for `snapshot_dir`.
    #[must_use]
    pub fn locate(snapshot_dir: &Path, explicit: Option<&Path>) -> Self {
        Self::locate_with_global(snapshot_dir, explicit, global_config_dir().as_deref())
    }

    fn locate_with_global(
        snapshot_dir: &Path,
        explicit: Option<&Path>,
        global_dir: Option<&Path>,
    ) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        if let Some(path) = SNAPSHOT_CONFIG_NAMES
            .iter()
            .map(|name| snapshot_dir.join(name))
            .find(|path| path.is_file())
        {
            debug!("Using snapshot config: {}", path.display());
            return Self::SnapshotDir(path);
        }

        global_dir
            .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
            .filter(|path| path.is_file())
            .map_or(Self::Default, Self::Global)
    }

    /// The file this source reads, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::SnapshotDir(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. A missing
    /// explicit file is an error; a missing default is not.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match self.path() {
            Some(path) => Config::from_file(path),
            None => Ok(Config::default()),
        }
    }
}

/// Directory holding the per-user `config.toml`.
///
/// `$ENTITY_LINT_CONFIG_DIR` when set, otherwise `~/.entity-lint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => Some(PathBuf::from(dir)),
        None => home::home_dir().map(|h| h.join(".entity-lint")),
    }
}
