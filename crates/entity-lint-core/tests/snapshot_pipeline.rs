//! Loads snapshots from disk and runs a rule through the analyzer.

use entity_lint_core::{
    snapshot, Analyzer, Config, Finding, Rule, Severity, TypeContext, TypeKind, Verdict,
};
use std::path::Path;

/// Flags interfaces whose name lacks the `I` prefix.
struct InterfacePrefix;

impl Rule for InterfacePrefix {
    fn name(&self) -> &'static str {
        "TS010_InterfacePrefix"
    }

    fn description(&self) -> &'static str {
        "Interfaces start with `I`"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn adr_path(&self) -> &'static str {
        "docs/adr/test-interface-prefix.md"
    }

    fn is_applicable(&self, ty: &TypeContext<'_>) -> bool {
        ty.decl.kind == TypeKind::Interface
    }

    fn evaluate(&self, ty: &TypeContext<'_>) -> Verdict {
        if ty.name().starts_with('I') {
            return Verdict::Pass;
        }
        Verdict::Fail(
            Finding::new(
                format!("Interface `{}` does not start with `I`", ty.name()),
                format!("Rename `{}` to `I{}`", ty.name(), ty.name()),
            )
            .at(ty.location()),
        )
    }
}

const SHOP: &str = r#"{
    "module": "Shop.Domain",
    "types": [
        { "name": "IClock", "namespace": "Shop.Domain", "kind": "interface" },
        {
            "name": "Repository",
            "namespace": "Shop.Domain",
            "kind": "interface",
            "location": { "file": "src/Repository.cs", "line": 3 }
        }
    ]
}"#;

const BILLING: &str = r#"{
    "types": [
        { "name": "Gateway", "namespace": "Billing", "kind": "interface" }
    ]
}"#;

fn write_snapshots(dir: &Path) {
    std::fs::write(dir.join("shop.json"), SHOP).expect("write shop");
    std::fs::write(dir.join("billing.json"), BILLING).expect("write billing");
}

#[test]
fn report_covers_every_loaded_module() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_snapshots(dir.path());

    let modules = snapshot::load_modules(dir.path(), &[]).expect("snapshots load");
    let analyzer = Analyzer::builder()
        .rule(InterfacePrefix)
        .build()
        .expect("analyzer builds");
    let report = analyzer.analyze(&modules);

    assert_eq!(report.modules_checked, 2);
    assert_eq!(report.types_checked, 3);
    assert_eq!(report.count_by_severity(), (0, 2, 0));
    assert!(!report.has_errors());

    let rule = report.rule("TS010_InterfacePrefix").expect("rule report");
    assert_eq!(rule.code, "TS010");

    let lines: Vec<String> = report
        .violations()
        .map(|(module, ty, v)| format!("{module} {ty}: {v}"))
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    Shop.Domain Shop.Domain.Repository: src/Repository.cs:3:1: warning [TS010] Interface `Repository` does not start with `I` (see: docs/adr/test-interface-prefix.md)
    billing Billing.Gateway: warning [TS010] Interface `Gateway` does not start with `I` (see: docs/adr/test-interface-prefix.md)
    ");
}

#[test]
fn config_severity_override_reaches_the_gate() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_snapshots(dir.path());

    let config = Config::parse(
        r#"
fail_on = "error"

[rules.TS010]
severity = "error"
allow = ["Billing.*"]
"#,
    )
    .expect("config parses");

    let modules = snapshot::load_modules(dir.path(), &config.analyzer.exclude).expect("load");
    let analyzer = Analyzer::builder()
        .config(config)
        .rule(InterfacePrefix)
        .build()
        .expect("analyzer builds");
    let report = analyzer.analyze(&modules);

    assert_eq!(report.count_by_severity(), (1, 0, 0));
    assert!(report.has_violations_at(analyzer.config().fail_on()));
    assert!(report
        .format_test_report(Severity::Error)
        .contains("TS010_InterfacePrefix [error] Shop.Domain::Shop.Domain.Repository"));
}

#[test]
fn standalone_rule_analyze_matches_analyzer() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_snapshots(dir.path());
    let modules = snapshot::load_modules(dir.path(), &[]).expect("load");

    let standalone = InterfacePrefix.analyze(&modules, dir.path());
    let driven = Analyzer::default().analyze_rule(&InterfacePrefix, &modules);
    assert_eq!(standalone, driven);
    assert_eq!(standalone["billing"].type_results.len(), 1);
}
