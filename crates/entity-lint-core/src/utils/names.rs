//! Name utilities for convention checks.
//!
//! Convention names are matched with plain prefix/suffix predicates so that
//! verdicts and messages stay exactly reproducible.

/// Mutator prefix (`SetStatus`).
pub const SETTER_PREFIX: &str = "Set";

/// Validation prefix (`ValidateName`).
pub const VALIDATION_PREFIX: &str = "Validate";

/// Internal-mutation suffix (`ApplyDiscountInternal`).
pub const INTERNAL_SUFFIX: &str = "Internal";

/// Returns true if `name` starts with `prefix`.
#[must_use]
pub fn has_prefix(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix)
}

/// Returns true if `name` ends with `suffix`.
#[must_use]
pub fn has_suffix(name: &str, suffix: &str) -> bool {
    name.ends_with(suffix)
}

/// `Set*` methods.
#[must_use]
pub fn is_setter(name: &str) -> bool {
    has_prefix(name, SETTER_PREFIX)
}

/// `Validate*` methods.
#[must_use]
pub fn is_validation(name: &str) -> bool {
    has_prefix(name, VALIDATION_PREFIX)
}

/// `*Internal` methods.
#[must_use]
pub fn is_internal_mutation(name: &str) -> bool {
    has_suffix(name, INTERNAL_SUFFIX)
}

/// Extracts the last `.`-separated segment, dropping generic arguments.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(last_segment("Shop.Domain.IAggregateRoot"), "IAggregateRoot");
/// assert_eq!(last_segment("IRepository<Order>"), "IRepository");
/// ```
#[must_use]
pub fn last_segment(name: &str) -> &str {
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit('.').next().unwrap_or(base)
}

/// Checks if a qualified type name matches a pattern.
///
/// Supports wildcards:
/// - `*` matches any single segment
/// - `**` matches any number of segments
///
/// # Examples
///
/// ```ignore
/// assert!(type_matches("Shop.Legacy.Order", "Shop.Legacy.*"));
/// assert!(type_matches("Shop.Legacy.Billing.Invoice", "Shop.**"));
/// assert!(!type_matches("Shop.Domain.Order", "Shop.Legacy.*"));
/// ```
#[must_use]
pub fn type_matches(name: &str, pattern: &str) -> bool {
    let name_parts: Vec<&str> = name.split('.').collect();
    let pattern_parts: Vec<&str> = pattern.split('.').collect();

    match_parts(&name_parts, &pattern_parts)
}

fn match_parts(name: &[&str], pattern: &[&str]) -> bool {
    let Some((first, rest)) = pattern.split_first() else {
        return name.is_empty();
    };

    match *first {
        "**" => (0..=name.len()).any(|i| match_parts(&name[i..], rest)),
        "*" => !name.is_empty() && match_parts(&name[1..], rest),
        literal => name.first() == Some(&literal) && match_parts(&name[1..], rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_matches_literal() {
        assert!(type_matches("Shop.Domain.Order", "Shop.Domain.Order"));
        assert!(!type_matches("Shop.Domain.Order", "Shop.Domain.Invoice"));
    }

    #[test]
    fn test_type_matches_wildcard() {
        assert!(type_matches("Shop.Legacy.Order", "Shop.Legacy.*"));
        assert!(!type_matches("Shop.Legacy.Billing.Invoice", "Shop.Legacy.*"));
        assert!(!type_matches("Shop.Domain.Order", "Shop.Legacy.*"));
    }

    #[test]
    fn test_type_matches_globstar() {
        assert!(type_matches("Shop.Legacy.Billing.Invoice", "Shop.**"));
        assert!(type_matches("Order", "**"));
        assert!(type_matches("Shop.Domain.Order", "**.Order"));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("Shop.Domain.IAggregateRoot"), "IAggregateRoot");
        assert_eq!(last_segment("IAggregateRoot"), "IAggregateRoot");
        assert_eq!(last_segment("Shop.IRepository<Shop.Order>"), "IRepository");
    }

    #[test]
    fn test_convention_prefixes() {
        assert!(is_setter("SetStatus"));
        assert!(!is_setter("Ship"));
        assert!(is_validation("ValidateName"));
        assert!(is_internal_mutation("AddLineInternal"));
        assert!(!is_internal_mutation("InternalAudit"));
    }
}
