//! # entity-lint
//!
//! Domain-entity convention linter over compiled symbol snapshots.
//!
//! This is the facade crate that re-exports the core model and the rule
//! catalog, and provides a conformance gate for `cargo test`.
//!
//! ## Quick Start: `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! entity-lint = "0.1"
//! ```
//!
//! ```rust,ignore
//! // tests/conventions.rs
//! #[test]
//! fn domain_model_follows_conventions() {
//!     entity_lint::run_check("target/symbols", None, None);
//! }
//! ```
//!
//! Relative snapshot directories resolve against `CARGO_MANIFEST_DIR`.
//! Configure via `entity-lint.toml` in the snapshot directory.
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use entity_lint::{check, Severity};
//!
//! let report = check("target/symbols".as_ref(), None)?;
//! if report.has_violations_at(Severity::Warning) {
//!     report.print_report();
//! }
//! ```

#![forbid(unsafe_code)]

pub use entity_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use entity_lint_rules::*;
}

mod runner;

pub use runner::{check, run_check, CheckError};
