//! List rules command implementation.

use loglint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<10} {:<20} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nEvery rule is enabled by default; toggle them in loglint.json:");
    println!("  {{\"enable_english_only\": false}}");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  loglint check --rules lowercase-start,no-sensitive-data");
    println!("  loglint check --rules LM001,LM003");
}
