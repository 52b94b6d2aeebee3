//! # entity-lint-rules
//!
//! Built-in convention rules for entity-lint.
//!
//! This crate provides the rule catalog enforcing domain-entity and
//! enumeration conventions over a compiled symbol model.
//!
//! ## Available Rules
//!
//! | Code | Applies to | Description |
//! |------|------------|-------------|
//! | DE001 | abstract entity | `Set*` methods are private |
//! | DE002 | abstract entity | `Validate*` methods are public and static |
//! | DE003 | abstract entity | `*Internal` methods are protected |
//! | DE004 | abstract entity | No public instance methods |
//! | DE005 | concrete `*AggregateRoot` | Implements `IAggregateRoot` |
//! | DE006 | concrete entity | No interface-typed instance fields |
//! | DE007 | concrete entity | `Process<Child>Internal` for child entity collections |
//! | DE008 | abstract entity | Constructors are protected |
//! | DE009 | abstract entity | Nested `{Type}Metadata` when validation exists |
//! | DE010 | concrete entity | At most one abstract level below the entity root |
//! | DE011 | abstract entity | No `CreateFromExistingInfo` factory |
//! | EN001 | enum | No `Enum` suffix |
//! | EN002 | enum | Narrowest underlying integer type |
//! | EN003 | enum | Zero value is named `None` |
//!
//! ## Usage
//!
//! ```ignore
//! use entity_lint_core::Analyzer;
//! use entity_lint_rules::{AggregateRootInterface, MaxInheritanceDepth};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(AggregateRootInterface::new())
//!     .rule(MaxInheritanceDepth::new().max_depth(2))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate_root_interface;
pub mod max_inheritance_depth;
pub mod metadata_for_validation;
pub mod minimal_underlying_type;
pub mod no_create_from_existing_info;
pub mod no_enum_suffix;
pub mod no_external_dependencies;
pub mod no_public_instance_methods;
pub mod one_by_one_child_processing;
pub mod private_set_methods;
pub mod protected_constructors;
pub mod protected_internal_methods;
pub mod public_static_validate_methods;
pub mod zero_value_is_none;

mod catalog;
mod presets;

#[cfg(test)]
mod test_support;

pub use aggregate_root_interface::AggregateRootInterface;
pub use catalog::{rules_from_config, Catalog};
pub use max_inheritance_depth::MaxInheritanceDepth;
pub use metadata_for_validation::MetadataForValidation;
pub use minimal_underlying_type::MinimalUnderlyingType;
pub use no_create_from_existing_info::NoCreateFromExistingInfo;
pub use no_enum_suffix::NoEnumSuffix;
pub use no_external_dependencies::NoExternalDependencies;
pub use no_public_instance_methods::NoPublicInstanceMethods;
pub use one_by_one_child_processing::OneByOneChildProcessing;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
pub use private_set_methods::PrivateSetMethods;
pub use protected_constructors::ProtectedConstructors;
pub use protected_internal_methods::ProtectedInternalMethods;
pub use public_static_validate_methods::PublicStaticValidateMethods;
pub use zero_value_is_none::ZeroValueIsNone;

/// Re-export core types for convenience.
pub use entity_lint_core::{Rule, Severity, Violation};
