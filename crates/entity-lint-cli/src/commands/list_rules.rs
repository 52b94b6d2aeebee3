//! List rules command implementation.

use entity_lint_rules::{Catalog, Preset};

/// Runs the list-rules command.
pub fn run() {
    let catalog = Catalog::all();

    println!("Available rules:\n");
    println!("{:<7} {:<36} {:<9} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(100));

    for rule in catalog.iter() {
        println!(
            "{:<7} {:<36} {:<9} {}",
            rule.code(),
            rule.name(),
            rule.default_severity(),
            rule.description()
        );
        println!("{:<54}see: {}", "", rule.adr_path());
    }

    println!("\nPresets:");
    for preset in [Preset::Recommended, Preset::Strict, Preset::Minimal] {
        let codes: Vec<&str> = preset.rules().iter().map(|r| r.code()).collect();
        println!("  {:<12} {}", preset.name(), codes.join(", "));
    }
    println!("  (strict runs every rule at error severity)");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  entity-lint check --rules DE005_AggregateRootInterface,EN001");
}
