//! # entity-lint-core
//!
//! Core framework for enforcing domain-entity conventions over a compiled
//! symbol model.
//!
//! This crate provides the foundational traits and types for building
//! convention rules. It includes:
//!
//! - [`SymbolModel`] and friends, the read-only view of compiled modules
//! - [`EntityShape`] and [`SymbolIndex`] for entity classification
//! - [`Rule`] trait with its applicability gate and verdict function
//! - [`Analyzer`] for orchestrating rule × module × type evaluation
//! - [`Violation`] and the result model for reporting findings
//!
//! ## Example
//!
//! ```ignore
//! use entity_lint_core::{snapshot, Analyzer};
//!
//! let modules = snapshot::load_modules(Path::new("./snapshots"), &[])?;
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let report = analyzer.analyze(&modules);
//! report.print_report();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod classifier;
mod config;
mod model;
mod result;
mod rule;
mod types;

/// Loading symbol snapshots from disk.
pub mod snapshot;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use classifier::{EntityShape, SymbolIndex, TypeContext};
pub use config::{
    global_config_dir, AnalyzerConfig, Config, ConfigError, ConfigSource, RuleConfig,
    CONFIG_DIR_ENV, SNAPSHOT_CONFIG_NAMES,
};
pub use model::{
    Accessibility, BaseType, EnumInfo, EnumMember, IntegerWidth, Member, MemberKind, ModuleSet,
    SymbolModel, TypeDecl, TypeKind, TypeRef,
};
pub use result::{
    ConformanceReport, ProjectAnalysisResult, RuleReport, TypeAnalysisResult, TypeAnalysisStatus,
};
pub use rule::{Finding, Rule, RuleBox, Verdict};
pub use snapshot::SnapshotError;
pub use types::{Location, Severity, Violation, ViolationDiagnostic};
