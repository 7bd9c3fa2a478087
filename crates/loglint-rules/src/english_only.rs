//! Rule requiring log messages to use only English letters.
//!
//! Non-letter characters are never inspected here; any letter outside the
//! basic Latin alphabet violates. The fix drops the offending letters,
//! collapses the leftover whitespace runs, and trims the ends.

use loglint_core::extract::collect_messages;
use loglint_core::{FileContext, Replacement, Rule, Severity, Suggestion, Violation};

/// Rule code for english-only.
pub const CODE: &str = "LM004";

/// Rule name for english-only.
pub const NAME: &str = "english-only";

/// Requires log messages to contain only English letters.
#[derive(Debug, Clone)]
pub struct EnglishOnly {
    severity: Severity,
}

impl Default for EnglishOnly {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishOnly {
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

impl Rule for EnglishOnly {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires log messages to be written in English"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext<'_>, ast: &syn::File) -> Vec<Violation> {
        let mut violations = Vec::new();

        for message in collect_messages(ctx, ast) {
            if is_english_only(&message.text) {
                continue;
            }

            let corrected = strip_non_english(&message.text);
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    message.location.clone(),
                    "log message should be in English only",
                )
                .with_suggestion(Suggestion::with_fix(
                    "Remove non-English characters from log message",
                    Replacement::new(message.location, format!("\"{corrected}\"")),
                )),
            );
        }

        violations
    }
}

/// Returns true if every letter in the message is a basic Latin letter.
/// Non-letter characters cannot violate this rule.
fn is_english_only(msg: &str) -> bool {
    msg.chars()
        .all(|c| !c.is_alphabetic() || c.is_ascii_alphabetic())
}

/// Drops non-Latin letters, preserving all non-letter characters, then
/// collapses whitespace runs into single spaces and trims the ends.
fn strip_non_english(msg: &str) -> String {
    let kept: String = msg
        .chars()
        .filter(|&c| !c.is_alphabetic() || c.is_ascii_alphabetic())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
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
        EnglishOnly::new().check(&ctx, &ast)
    }

    #[test]
    fn english_message_passes() {
        let violations = check_code(r#"fn f() { logger.Info("fedor is a good developer"); }"#);
        assert!(violations.is_empty());
    }

    #[test]
    fn digits_and_punctuation_pass() {
        assert!(is_english_only("fedor is 21 years old"));
        assert!(is_english_only("clean, efficient, and well-documented."));
    }

    #[test]
    fn cyrillic_violates() {
        let violations = check_code(r#"fn f() { logger.Info("message with русский text"); }"#);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
    }

    #[test]
    fn cjk_violates() {
        let violations = check_code(r#"fn f() { logger.Info("message with 中文"); }"#);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn corrected_text_collapses_whitespace() {
        assert_eq!(
            strip_non_english("message with русский text"),
            "message with text"
        );
        assert_eq!(strip_non_english("中文 only"), "only");
    }

    #[test]
    fn corrected_text_keeps_non_letter_characters() {
        assert_eq!(strip_non_english("код: 42"), ": 42");
    }

    #[test]
    fn fix_is_idempotent() {
        let corrected = strip_non_english("message with русский text");
        assert!(is_english_only(&corrected));
    }

    #[test]
    fn non_log_call_is_ignored() {
        let violations = check_code(r#"fn f() { helper.Process("сообщение"); }"#);
        assert!(violations.is_empty());
    }
}
