//! Rule forbidding special characters and emoji in log messages.
//!
//! Letters, digits, and whitespace always pass, along with a small
//! punctuation allow-list. Everything else violates: `!`, `?`, ellipsis,
//! emoji, and any other symbol. The scan reports once, at the first
//! offending character.

use loglint_core::extract::collect_messages;
use loglint_core::{FileContext, Replacement, Rule, Severity, Suggestion, Violation};

/// Rule code for no-special-chars.
pub const CODE: &str = "LM002";

/// Rule name for no-special-chars.
pub const NAME: &str = "no-special-chars";

/// Punctuation characters permitted in log messages.
const ALLOWED_PUNCTUATION: [char; 8] = ['.', ',', ':', ';', '-', '_', '\'', '"'];

/// Forbids special characters and emoji in log messages.
#[derive(Debug, Clone)]
pub struct NoSpecialChars {
    severity: Severity,
}

impl Default for NoSpecialChars {
    fn default() -> Self {
        Self::new()
    }
}

impl NoSpecialChars {
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

impl Rule for NoSpecialChars {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids special characters and emoji in log messages"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext<'_>, ast: &syn::File) -> Vec<Violation> {
        let mut violations = Vec::new();

        for message in collect_messages(ctx, ast) {
            if !has_special_chars(&message.text) {
                continue;
            }

            let corrected = strip_special_chars(&message.text);
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    message.location.clone(),
                    "log message should not contain special characters or emoji",
                )
                .with_suggestion(Suggestion::with_fix(
                    "Remove special characters and emoji from log message",
                    Replacement::new(message.location, format!("\"{corrected}\"")),
                )),
            );
        }

        violations
    }
}

/// Returns true if the character is permitted in a log message.
fn is_allowed(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Returns true at the first character outside the allow-list.
fn has_special_chars(msg: &str) -> bool {
    msg.chars().any(|c| !is_allowed(c))
}

/// Copies through only allowed characters; the corrected text additionally
/// admits forward slashes.
fn strip_special_chars(msg: &str) -> String {
    msg.chars()
        .filter(|&c| is_allowed(c) || c == '/')
        .collect()
}
