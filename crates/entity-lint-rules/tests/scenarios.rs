//! End-to-end conformance scenarios over the full catalog.

use entity_lint_core::{
    Accessibility, Analyzer, BaseType, IntegerWidth, Member, ModuleSet, ProjectAnalysisResult,
    Rule, SymbolModel, TypeAnalysisStatus, TypeDecl, TypeRef,
};
use entity_lint_rules::{
    AggregateRootInterface, Catalog, MaxInheritanceDepth, MinimalUnderlyingType,
    NoEnumSuffix, NoExternalDependencies, OneByOneChildProcessing, ZeroValueIsNone,
};
use std::collections::BTreeMap;
use std::path::Path;

const MODULE: &str = "Shop.Domain";

fn modules(types: Vec<TypeDecl>) -> ModuleSet {
    let mut modules = ModuleSet::new();
    modules.insert(MODULE.to_string(), SymbolModel::new(types));
    modules
}

fn entity(name: &str) -> TypeDecl {
    TypeDecl::class(name)
        .in_namespace(MODULE)
        .sealed()
        .extends(BaseType::self_bound("Entity"))
}

fn run<R: Rule>(rule: &R, types: Vec<TypeDecl>) -> BTreeMap<String, ProjectAnalysisResult> {
    rule.analyze(&modules(types), Path::new("target/entity-lint"))
}

fn first_status<R: Rule>(rule: &R, types: Vec<TypeDecl>) -> TypeAnalysisStatus {
    run(rule, types)[MODULE].type_results[0].status
}

fn first_message<R: Rule>(rule: &R, types: Vec<TypeDecl>) -> String {
    run(rule, types)[MODULE].type_results[0]
        .violation
        .as_ref()
        .map(|v| v.message.clone())
        .expect("expected a violation")
}

#[test]
fn aggregate_root_with_marker_passes() {
    let root = entity("OrderAggregateRoot").implements("IAggregateRoot");
    assert_eq!(
        first_status(&AggregateRootInterface::new(), vec![root]),
        TypeAnalysisStatus::Passed
    );
}

#[test]
fn aggregate_root_without_marker_fails() {
    let rule = AggregateRootInterface::new();
    let results = run(&rule, vec![entity("OrderAggregateRoot")]);
    let result = &results[MODULE].type_results[0];

    assert_eq!(result.type_name, "Shop.Domain.OrderAggregateRoot");
    assert_eq!(result.status, TypeAnalysisStatus::Failed);
    let violation = result.violation.as_ref().expect("violation");
    assert_eq!(violation.rule, rule.name());
    assert_eq!(violation.adr, rule.adr_path());
    insta::assert_snapshot!(
        violation.message.as_str(),
        @"Aggregate root `OrderAggregateRoot` does not implement `IAggregateRoot`"
    );
}

#[test]
fn interface_field_fails_static_field_passes() {
    let instance = entity("Order").with_member(Member::field(
        "_notifier",
        Accessibility::Private,
        TypeRef::interface("INotifier"),
    ));
    insta::assert_snapshot!(
        first_message(&NoExternalDependencies::new(), vec![instance]),
        @"Entity `Order` depends on interface `INotifier` through field `_notifier`"
    );

    let shared = entity("Order").with_member(
        Member::field("Notifier", Accessibility::Private, TypeRef::interface("INotifier"))
            .static_(),
    );
    assert_eq!(
        first_status(&NoExternalDependencies::new(), vec![shared]),
        TypeAnalysisStatus::Passed
    );
}

#[test]
fn child_collection_requires_processing_method() {
    let lines = Member::field(
        "_lines",
        Accessibility::Private,
        TypeRef::generic("List", vec![TypeRef::named("OrderLine")]),
    );
    let rule = OneByOneChildProcessing::new();

    insta::assert_snapshot!(
        first_message(&rule, vec![entity("Order").with_member(lines.clone()), entity("OrderLine")]),
        @"Entity `Order` holds `List<OrderLine>` in field `_lines` but declares no `ProcessOrderLineInternal` method (pattern `Process<Child>Internal`)"
    );

    let fixed = entity("Order")
        .with_member(lines)
        .with_member(Member::method("ProcessOrderLineInternal", Accessibility::Protected));
    assert_eq!(
        first_status(&rule, vec![fixed, entity("OrderLine")]),
        TypeAnalysisStatus::Passed
    );
}

#[test]
fn badly_shaped_enum_fails_three_rules_with_distinct_details() {
    let status = TypeDecl::enumeration("OrderStatusEnum", IntegerWidth::Int)
        .in_namespace(MODULE)
        .with_variant("Open", 0)
        .with_variant("Shipped", 1)
        .with_variant("Closed", 2);

    insta::assert_snapshot!(
        first_message(&NoEnumSuffix::new(), vec![status.clone()]),
        @"Enum `OrderStatusEnum` ends with the `Enum` suffix"
    );
    insta::assert_snapshot!(
        first_message(&MinimalUnderlyingType::new(), vec![status.clone()]),
        @"Enum `OrderStatusEnum` uses `int` but every value fits in `byte`"
    );
    insta::assert_snapshot!(
        first_message(&ZeroValueIsNone::new(), vec![status]),
        @"Enum `OrderStatusEnum` assigns literal `0` to `Open`; the zero value must be named `None`"
    );
}

#[test]
fn inheritance_depth_two_fails_one_passes() {
    let deep = TypeDecl::class("Invoice")
        .sealed()
        .extends(BaseType::new("BillingDocument").abstract_())
        .extends(BaseType::new("AuditableEntity").abstract_())
        .extends(BaseType::self_bound("Entity"));
    let message = first_message(&MaxInheritanceDepth::new(), vec![deep]);
    assert!(message.contains('2'));
    insta::assert_snapshot!(message, @"Entity `Invoice` has inheritance depth 2 (max: 1)");

    let shallow = TypeDecl::class("Invoice")
        .sealed()
        .extends(BaseType::new("AuditableEntity").abstract_())
        .extends(BaseType::self_bound("Entity"));
    assert_eq!(
        first_status(&MaxInheritanceDepth::new(), vec![shallow]),
        TypeAnalysisStatus::Passed
    );
}

#[test]
fn inapplicable_types_pass_under_every_rule() {
    let types = vec![
        TypeDecl::class("PriceCalculator").in_namespace(MODULE),
        TypeDecl::interface("IClock").in_namespace(MODULE),
    ];
    let modules = modules(types);

    for rule in Catalog::all().iter() {
        let results = Analyzer::default().analyze_rule(rule, &modules);
        for result in &results[MODULE].type_results {
            assert!(result.is_passed(), "{} failed {}", rule.name(), result.type_name);
            assert!(result.violation.is_none());
        }
    }
}

#[test]
fn full_catalog_reports_are_idempotent_and_tied_to_rules() {
    let types = vec![
        entity("OrderAggregateRoot").with_member(Member::field(
            "_clock",
            Accessibility::Private,
            TypeRef::interface("IClock"),
        )),
        TypeDecl::class("Product")
            .in_namespace(MODULE)
            .abstract_()
            .extends(BaseType::self_bound("Entity"))
            .with_member(Member::constructor("Product", Accessibility::Public))
            .with_member(Member::method("ValidateSku", Accessibility::Public)),
        TypeDecl::enumeration("Color", IntegerWidth::Byte)
            .in_namespace(MODULE)
            .with_variant("None", 0),
    ];
    let modules = modules(types);
    let analyzer = Analyzer::builder()
        .rules(Catalog::all().into_rules())
        .build()
        .expect("analyzer builds");

    let first = analyzer.analyze(&modules);
    let second = analyzer.analyze(&modules);
    assert_eq!(first, second);

    for report in &first.rules {
        for (_, _, violation) in report.violations() {
            assert_eq!(violation.rule, report.rule);
            assert_eq!(violation.adr, report.adr);
        }
    }

    let failing: Vec<&str> = first
        .rules
        .iter()
        .filter(|r| r.violations().next().is_some())
        .map(|r| r.code.as_str())
        .collect();
    assert_eq!(failing, vec!["DE002", "DE005", "DE006", "DE008", "DE009"]);
}
