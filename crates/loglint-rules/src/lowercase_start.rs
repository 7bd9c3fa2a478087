//! Rule requiring log messages to start with a lowercase letter.
//!
//! Messages whose first non-whitespace character is an uppercase letter are
//! flagged, with a fix that lowercases just that letter. Messages starting
//! with a digit, punctuation, or nothing at all are exempt.

use loglint_core::extract::collect_messages;
use loglint_core::{FileContext, Replacement, Rule, Severity, Suggestion, Violation};

/// Rule code for lowercase-start.
pub const CODE: &str = "LM001";

/// Rule name for lowercase-start.
pub const NAME: &str = "lowercase-start";

/// Requires log messages to start with a lowercase letter.
#[derive(Debug, Clone)]
pub struct LowercaseStart {
    severity: Severity,
}

impl Default for LowercaseStart {
    fn default() -> Self {
        Self::new()
    }
}

impl LowercaseStart {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for LowercaseStart {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires log messages to start with a lowercase letter"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext<'_>, ast: &syn::File) -> Vec<Violation> {
        let mut violations = Vec::new();

        for message in collect_messages(ctx, ast) {
            if !starts_with_uppercase(&message.text) {
                continue;
            }

            let corrected = lowercased_first(&message.text);
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    message.location.clone(),
                    "log message should start with lowercase letter",
                )
                .with_suggestion(Suggestion::with_fix(
                    "Change first letter to lowercase",
                    Replacement::new(message.location, format!("\"{corrected}\"")),
                )),
            );
        }

        violations
    }
}

/// Returns true if the first non-whitespace character is an uppercase letter.
///
/// Empty and whitespace-only messages pass, as do messages whose first
/// character is not a letter.
fn starts_with_uppercase(msg: &str) -> bool {
    match msg.trim_start().chars().next() {
        Some(first) if first.is_alphabetic() => first.is_uppercase(),
        _ => false,
    }
}

/// Lowercases only the first letter, leaving everything else unchanged.
fn lowercased_first(msg: &str) -> String {
    let Some(idx) = msg.find(|c: char| !c.is_whitespace()) else {
        return msg.to_string();
    };
    let rest = &msg[idx..];
    let Some(first) = rest.chars().next() else {
        return msg.to_string();
    };

    let mut out = String::with_capacity(msg.len());
    out.push_str(&msg[..idx]);
    out.extend(first.to_lowercase());
    out.push_str(&rest[first.len_utf8()..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use loglint_core::StaticTypeIndex;
    use std::path::Path;

    fn check_code(code: &str) -> Vec<Violation> {
        let ast = syn::parse_file(code).expect("Failed to parse");
        let types = StaticTypeIndex::conventional();
        let ctx = FileContext::new(Path::new("test.rs"), code, Path::new("test.rs"), &types);
        LowercaseStart::new().check(&ctx, &ast)
    }

    #[test]
    fn lowercase_message_passes() {
        let violations = check_code(r#"fn f() { logger.Info("fedya"); }"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn uppercase_message_violates_with_fix() {
        let violations = check_code(r#"fn f() { logger.Info("Fedya"); }"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);

        let suggestion = violations[0].suggestion.as_ref().expect("fix offered");
        let replacement = suggestion.replacement.as_ref().expect("replacement");
        assert_eq!(replacement.new_text, "\"fedya\"");
        assert_eq!(replacement.location.length, "Fedya".len() + 2);
    }

    #[test]
    fn digit_start_passes() {
        let violations = check_code(r#"fn f() { logger.Info("21 Fedya"); }"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn whitespace_only_message_passes() {
        let violations = check_code(r#"fn f() { logger.Info("   "); }"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn leading_whitespace_uppercase_violates() {
        assert!(starts_with_uppercase(" Fedya "));
        assert_eq!(lowercased_first(" Fedya "), " fedya ");
    }

    #[test]
    fn fix_is_idempotent() {
        let corrected = lowercased_first("Fedya");
        assert_eq!(corrected, "fedya");
        assert!(!starts_with_uppercase(&corrected));
    }

    #[test]
    fn non_log_call_is_ignored() {
        let violations = check_code(r#"fn f() { helper.Process("Should not trigger"); }"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn non_literal_argument_is_ignored() {
        let violations = check_code(r#"fn f() { logger.Info(message); }"#);
        assert!(violations.is_empty());
    }
}
