//! Check command implementation.

use anyhow::{Context, Result};
use loglint_core::{Analyzer, Config, RuleBox, StaticTypeIndex};
use loglint_rules::{enabled_rules, EnglishOnly, LowercaseStart, NoSensitiveData, NoSpecialChars};
use std::path::Path;

use super::output;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let source = crate::config_resolver::resolve(path, config_path);
    if source.is_global() {
        if let Some(p) = source.path() {
            tracing::info!("Using global config: {}", p.display());
        }
    }

    // Missing or unreadable config falls back to defaults, never fails the run.
    let config = Config::resolve(source.path());

    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        enabled_rules(&config.rules)
    };

    let mut builder = Analyzer::builder()
        .root(path)
        .type_query(StaticTypeIndex::conventional())
        .config(config);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "lowercase-start" | "LM001" => rules.push(Box::new(LowercaseStart::new())),
            "no-special-chars" | "LM002" => rules.push(Box::new(NoSpecialChars::new())),
            "no-sensitive-data" | "LM003" => rules.push(Box::new(NoSensitiveData::new())),
            "english-only" | "LM004" => rules.push(Box::new(EnglishOnly::new())),
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}
