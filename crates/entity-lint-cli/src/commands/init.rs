//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

/// File written by `entity-lint init`.
pub const CONFIG_FILE: &str = "entity-lint.toml";

const DEFAULT_CONFIG: &str = r#"# entity-lint configuration

# Rule preset: "recommended" (default), "strict" or "minimal"
preset = "recommended"

# Lowest severity that fails `entity-lint check` ("error", "warning", "info")
fail_on = "error"

[analyzer]
# Snapshot files to skip (glob patterns relative to the snapshot directory)
exclude = [
    "**/*.Tests.json",
]

# Worker threads used to analyze modules (default: all cores)
# parallelism = 4

# Rules are keyed by name or code. Every rule accepts
# `enabled`, `severity` and `allow` (qualified type-name patterns).

[rules.DE005]
suffix = "AggregateRoot"
interface = "IAggregateRoot"

[rules.DE007]
collections = [
    "List",
    "IList",
    "IReadOnlyList",
    "ICollection",
    "IReadOnlyCollection",
    "Collection",
    "ReadOnlyCollection",
    "ImmutableList",
]

[rules.DE010]
max_depth = 1
# allow = ["Shop.Legacy.**"]

[rules.DE011]
factory = "CreateFromExistingInfo"

[rules.EN001]
suffix = "Enum"
# severity = "error"

[rules.EN003]
zero_name = "None"
"#;

/// Runs the init command in the current directory.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Export symbol snapshots next to it");
    println!("  3. Run: entity-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
