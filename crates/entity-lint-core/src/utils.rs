//! Utility functions for rule implementations.

pub mod names;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use names::{has_prefix, has_suffix, last_segment, type_matches};
