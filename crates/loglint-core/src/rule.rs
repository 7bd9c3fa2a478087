//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint rule based on `syn` AST analysis.
///
/// Implement this trait to create rules that analyze individual source files.
/// Rules receive the parsed AST plus a [`FileContext`] carrying the host's
/// type-query handle, and return any violations found.
///
/// # Example
///
/// ```ignore
/// use loglint_core::{FileContext, Rule, Severity, Violation};
/// use loglint_core::extract::collect_messages;
///
/// pub struct NoShouting;
///
/// impl Rule for NoShouting {
///     fn name(&self) -> &'static str { "no-shouting" }
///     fn code(&self) -> &'static str { "LM099" }
///
///     fn check(&self, ctx: &FileContext, ast: &syn::File) -> Vec<Violation> {
///         collect_messages(ctx, ast)
///             .into_iter()
///             .filter(|m| m.text.chars().all(char::is_uppercase))
///             .map(|m| Violation::new(self.code(), self.name(), Severity::Warning,
///                 m.location, "log message should not shout"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "lowercase-start").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "LM001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single file and returns any violations found.
    fn check(&self, ctx: &FileContext<'_>, ast: &syn::File) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
