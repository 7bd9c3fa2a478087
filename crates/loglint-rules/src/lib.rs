//! # loglint-rules
//!
//! Built-in log message rules for loglint.
//!
//! Every rule inspects the literal message text of recognized log calls and
//! reports at most one violation per message; a single message may trigger
//! any subset of the rules.
//!
//! ## Available Rules
//!
//! | Code  | Name                | Description |
//! |-------|---------------------|-------------|
//! | LM001 | `lowercase-start`   | Requires log messages to start with a lowercase letter |
//! | LM002 | `no-special-chars`  | Forbids special characters and emoji in log messages |
//! | LM003 | `no-sensitive-data` | Forbids sensitive data in log messages |
//! | LM004 | `english-only`      | Requires log messages to be written in English |
//!
//! ## Usage
//!
//! ```ignore
//! use loglint_core::{Analyzer, Config};
//! use loglint_rules::enabled_rules;
//!
//! let config = Config::resolve(None);
//! let mut builder = Analyzer::builder().root("./src");
//! for rule in enabled_rules(&config.rules) {
//!     builder = builder.rule_box(rule);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod english_only;
mod lowercase_start;
mod no_sensitive_data;
mod no_special_chars;

pub use english_only::EnglishOnly;
pub use lowercase_start::LowercaseStart;
pub use no_sensitive_data::NoSensitiveData;
pub use no_special_chars::NoSpecialChars;

/// Re-export core types for convenience.
pub use loglint_core::{Rule, RuleBox, Severity, Violation};

use loglint_core::RuleToggles;

/// Returns all available rules in their fixed evaluation order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(LowercaseStart::new()),
        Box::new(NoSpecialChars::new()),
        Box::new(NoSensitiveData::new()),
        Box::new(EnglishOnly::new()),
    ]
}

/// Returns the rules enabled by the given toggles, in the fixed evaluation
/// order. Diagnostics at the same literal come out in this order run after
/// run.
#[must_use]
pub fn enabled_rules(toggles: &RuleToggles) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();
    if toggles.enable_lowercase_start {
        rules.push(Box::new(LowercaseStart::new()));
    }
    if toggles.enable_no_special_chars {
        rules.push(Box::new(NoSpecialChars::new()));
    }
    if toggles.enable_sensitive_patterns {
        rules.push(Box::new(NoSensitiveData::new()));
    }
    if toggles.enable_english_only {
        rules.push(Box::new(EnglishOnly::new()));
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rules_has_fixed_order() {
        let rules = all_rules();
        let codes: Vec<&str> = rules.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["LM001", "LM002", "LM003", "LM004"]);
    }

    #[test]
    fn toggles_select_rules() {
        let toggles = RuleToggles {
            enable_lowercase_start: false,
            enable_english_only: true,
            enable_no_special_chars: false,
            enable_sensitive_patterns: true,
        };
        let names: Vec<&str> = enabled_rules(&toggles).iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["no-sensitive-data", "english-only"]);
    }

    #[test]
    fn default_toggles_enable_everything() {
        assert_eq!(enabled_rules(&RuleToggles::default()).len(), 4);
    }
}
