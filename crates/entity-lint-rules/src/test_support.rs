//! Helpers shared by the rule unit tests.

use entity_lint_core::{
    Analyzer, BaseType, ModuleSet, Rule, SymbolModel, TypeAnalysisResult, TypeDecl, Violation,
};

pub(crate) const MODULE: &str = "Shop.Domain";

/// Runs a rule over one module built from `types`.
pub(crate) fn analyze<R: Rule>(rule: &R, types: Vec<TypeDecl>) -> Vec<TypeAnalysisResult> {
    let mut modules = ModuleSet::new();
    modules.insert(MODULE.to_string(), SymbolModel::new(types));
    Analyzer::default()
        .analyze_rule(rule, &modules)
        .remove(MODULE)
        .map(|project| project.type_results)
        .unwrap_or_default()
}

/// Verdict for `ty`, with `others` declared alongside it.
pub(crate) fn check_with<R: Rule>(rule: &R, ty: TypeDecl, others: Vec<TypeDecl>) -> Option<Violation> {
    let mut types = vec![ty];
    types.extend(others);
    analyze(rule, types).swap_remove(0).violation
}

/// Verdict for a lone type.
pub(crate) fn check<R: Rule>(rule: &R, ty: TypeDecl) -> Option<Violation> {
    check_with(rule, ty, Vec::new())
}

pub(crate) fn abstract_entity(name: &str) -> TypeDecl {
    TypeDecl::class(name)
        .abstract_()
        .extends(BaseType::self_bound("Entity"))
}

pub(crate) fn concrete_entity(name: &str) -> TypeDecl {
    TypeDecl::class(name)
        .sealed()
        .extends(BaseType::self_bound("Entity"))
}
