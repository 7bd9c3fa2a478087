//! Extraction of literal message text from recognized log calls.

use crate::classify::is_log_call;
use crate::context::FileContext;
use crate::types::Location;
use syn::visit::Visit;
use syn::{Expr, ExprLit, ExprMethodCall, Lit};

/// A literal log message together with the position of its source literal.
///
/// Produced once per qualifying call site and consumed read-only by every
/// validator; corrected text is always derived fresh, never written back.
#[derive(Debug, Clone)]
pub struct ExtractedMessage {
    /// The unescaped message text.
    pub text: String,
    /// Location of the literal token. The span length covers the literal
    /// plus its two quote delimiters, which is the fix replacement range.
    pub location: Location,
}

/// Extracts the message literal from a log call's first argument.
///
/// Returns `None` when the call has no arguments or the first argument is
/// anything other than a string literal; those calls are silently skipped.
/// Escape sequences are resolved to the runtime text (a malformed literal
/// never gets this far, the host parser rejects it).
#[must_use]
pub fn extract_message(call: &ExprMethodCall, ctx: &FileContext<'_>) -> Option<ExtractedMessage> {
    let first = call.args.first()?;

    let Expr::Lit(ExprLit {
        lit: Lit::Str(lit), ..
    }) = first
    else {
        return None;
    };

    let text = lit.value();
    let location = Location::from_span(ctx.relative_path_buf(), lit.span());
    let offset = ctx.offset_for(location.line, location.column);
    let location = location.with_span(offset, text.len() + 2);

    Some(ExtractedMessage { text, location })
}

/// Collects every literal log message in a file.
///
/// This is the shared walk all rules run on: visit every method call,
/// gate through the classifier, then extract. Empty literals are skipped,
/// there is nothing to check in them.
#[must_use]
pub fn collect_messages(ctx: &FileContext<'_>, ast: &syn::File) -> Vec<ExtractedMessage> {
    let mut collector = MessageCollector {
        ctx,
        messages: Vec::new(),
    };
    collector.visit_file(ast);
    collector.messages
}

struct MessageCollector<'a, 'b> {
    ctx: &'a FileContext<'b>,
    messages: Vec<ExtractedMessage>,
}

impl<'ast> Visit<'ast> for MessageCollector<'_, '_> {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        if is_log_call(node, self.ctx.types) {
            if let Some(message) = extract_message(node, self.ctx) {
                if !message.text.is_empty() {
                    self.messages.push(message);
                }
            }
        }

        syn::visit::visit_expr_method_call(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typequery::StaticTypeIndex;
    use std::path::Path;

    fn collect(source: &str) -> Vec<ExtractedMessage> {
        let ast = syn::parse_file(source).expect("valid source");
        let types = StaticTypeIndex::conventional();
        let ctx = FileContext::new(Path::new("test.rs"), source, Path::new("test.rs"), &types);
        collect_messages(&ctx, &ast)
    }

    #[test]
    fn collects_literal_messages_from_log_calls() {
        let messages = collect(
            r#"
fn run() {
    logger.Info("connection established");
    slog.Warn("retrying");
}
"#,
        );
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "connection established");
        assert_eq!(messages[1].text, "retrying");
    }

    #[test]
    fn skips_non_log_calls() {
        let messages = collect(
            r#"
fn run() {
    helper.Process("Should not trigger");
    logger.configure("not a severity method");
}
"#,
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn skips_non_literal_first_argument() {
        let messages = collect(
            r#"
fn run() {
    logger.Info(message);
    logger.Warn(format(template));
}
"#,
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn skips_calls_without_arguments() {
        let messages = collect(
            r#"
fn run() {
    logger.Info();
}
"#,
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn skips_empty_literals() {
        let messages = collect(
            r#"
fn run() {
    logger.Info("");
}
"#,
        );
        assert!(messages.is_empty());
    }

    #[test]
    fn unescapes_literal_text() {
        let messages = collect(
            "fn run() {\n    logger.Info(\"line one\\nline two\");\n}\n",
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "line one\nline two");
    }

    #[test]
    fn location_points_at_literal_with_quote_delimiters() {
        let source = "fn run() {\n    logger.Info(\"Hi there\");\n}\n";
        let messages = collect(source);
        assert_eq!(messages.len(), 1);
        let loc = &messages[0].location;
        assert_eq!(loc.line, 2);
        // Column of the opening quote, 1-indexed.
        assert_eq!(loc.column, 17);
        assert_eq!(loc.length, "Hi there".len() + 2);
        assert_eq!(&source[loc.offset..loc.offset + loc.length], "\"Hi there\"");
    }

    #[test]
    fn finds_messages_in_nested_expressions() {
        let messages = collect(
            r#"
fn run() {
    if ready {
        result.map(|_| logger.Error("operation failed"));
    }
}
"#,
        );
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "operation failed");
    }
}
