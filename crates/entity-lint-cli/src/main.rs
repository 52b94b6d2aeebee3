//! entity-lint CLI tool.
//!
//! Usage:
//! ```bash
//! entity-lint check [OPTIONS] [SNAPSHOT_DIR]
//! entity-lint list-rules
//! entity-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use entity_lint_core::ConfigSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// Domain-entity convention linter over compiled symbol snapshots
#[derive(Parser)]
#[command(name = "entity-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ENTITY_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run convention checks over a snapshot directory
    Check {
        /// Directory of symbol snapshots (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Directory to write `entity-lint-report.json` into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude snapshot patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Preset to use (recommended, strict, minimal); overrides the config
        #[arg(long)]
        preset: Option<String>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable diagnostics.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            output,
            format,
            rules,
            exclude,
            preset,
        } => {
            let source = ConfigSource::locate(&path, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                output,
                format,
                rules,
                exclude,
                preset,
            };
            let passed = commands::check::run(&path, &options, &source)?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
