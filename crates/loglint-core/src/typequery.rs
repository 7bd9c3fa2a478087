//! The type-query seam between the classifier and the host.
//!
//! `syn` gives us syntax only; whether `logger` in `logger.Info("msg")` is
//! actually a logger is a question for whoever owns type information. That
//! collaborator is injected behind the [`TypeQuery`] trait, so the classifier
//! never touches a concrete type representation. [`StaticTypeIndex`] is the
//! shipped implementation: a plain binding table, good enough for stand-alone
//! CLI runs and for tests.

use std::collections::HashMap;
use syn::Expr;

/// A named type together with its defining package path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedType {
    /// Import path of the defining package.
    pub package: String,
    /// Type name within that package.
    pub name: String,
}

impl NamedType {
    /// Creates a named type identity.
    #[must_use]
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }
}

/// The static type of a receiver expression, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A named type.
    Named(NamedType),
    /// A pointer or reference to another type.
    Pointer(Box<TypeRef>),
}

impl TypeRef {
    /// Strips at most one level of pointer indirection.
    #[must_use]
    pub fn strip_pointer(&self) -> &TypeRef {
        match self {
            Self::Pointer(inner) => inner,
            other => other,
        }
    }
}

/// What a receiver expression resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier refers to an imported package, not a value.
    Package(String),
    /// The expression is a value of the given static type.
    Value(TypeRef),
}

/// Host-provided type information for receiver expressions.
///
/// Implementations answer "what is this expression?" and nothing more. A
/// `None` answer is always acceptable: the classifier fails open and the call
/// is simply not inspected.
pub trait TypeQuery: Send + Sync {
    /// Resolves a receiver expression to a package reference or a typed value.
    fn resolve_receiver(&self, expr: &Expr) -> Option<Resolution>;
}

/// A binding-table implementation of [`TypeQuery`].
///
/// Maps plain receiver identifiers to resolutions. Anything that is not a
/// single-identifier path is unresolvable, which matches the only receiver
/// shapes the classifier cares about.
#[derive(Debug, Clone, Default)]
pub struct StaticTypeIndex {
    bindings: HashMap<String, Resolution>,
}

impl StaticTypeIndex {
    /// Creates an empty index. Every lookup fails, so nothing classifies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding from a receiver identifier to its resolution.
    #[must_use]
    pub fn bind(mut self, ident: impl Into<String>, resolution: Resolution) -> Self {
        self.bindings.insert(ident.into(), resolution);
        self
    }

    /// Returns an index with the conventional logger bindings.
    ///
    /// Covers the receiver names the recognized logging APIs are commonly
    /// bound to: `log` and `slog` as standard package references, `logger`
    /// and `sugar` as the structured and sugared logger types.
    #[must_use]
    pub fn conventional() -> Self {
        Self::new()
            .bind("log", Resolution::Package("log".to_string()))
            .bind("slog", Resolution::Package("log/slog".to_string()))
            .bind(
                "logger",
                Resolution::Value(TypeRef::Pointer(Box::new(TypeRef::Named(NamedType::new(
                    "go.uber.org/zap",
                    "Logger",
                ))))),
            )
            .bind(
                "sugar",
                Resolution::Value(TypeRef::Pointer(Box::new(TypeRef::Named(NamedType::new(
                    "go.uber.org/zap",
                    "SugaredLogger",
                ))))),
            )
    }
}

impl TypeQuery for StaticTypeIndex {
    fn resolve_receiver(&self, expr: &Expr) -> Option<Resolution> {
        let Expr::Path(path) = expr else {
            return None;
        };
        let ident = path.path.get_ident()?;
        self.bindings.get(&ident.to_string()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_expr(source: &str) -> Expr {
        syn::parse_str(source).expect("valid expression")
    }

    #[test]
    fn empty_index_resolves_nothing() {
        let index = StaticTypeIndex::new();
        assert_eq!(index.resolve_receiver(&parse_expr("logger")), None);
    }

    #[test]
    fn bound_identifier_resolves() {
        let index = StaticTypeIndex::new().bind("log", Resolution::Package("log".to_string()));
        assert_eq!(
            index.resolve_receiver(&parse_expr("log")),
            Some(Resolution::Package("log".to_string()))
        );
    }

    #[test]
    fn non_identifier_receiver_is_unresolvable() {
        let index = StaticTypeIndex::conventional();
        assert_eq!(index.resolve_receiver(&parse_expr("self.logger")), None);
        assert_eq!(index.resolve_receiver(&parse_expr("(1 + 2)")), None);
    }

    #[test]
    fn strip_pointer_removes_one_level() {
        let named = TypeRef::Named(NamedType::new("log/slog", "Logger"));
        let ptr = TypeRef::Pointer(Box::new(named.clone()));
        assert_eq!(ptr.strip_pointer(), &named);
        // A bare named type is unchanged.
        assert_eq!(named.strip_pointer(), &named);
        // Only one level: a double pointer strips to a single pointer.
        let double = TypeRef::Pointer(Box::new(ptr.clone()));
        assert_eq!(double.strip_pointer(), &ptr);
    }

    #[test]
    fn conventional_bindings_cover_std_and_structured_loggers() {
        let index = StaticTypeIndex::conventional();
        assert!(matches!(
            index.resolve_receiver(&parse_expr("slog")),
            Some(Resolution::Package(p)) if p == "log/slog"
        ));
        assert!(matches!(
            index.resolve_receiver(&parse_expr("logger")),
            Some(Resolution::Value(_))
        ));
    }
}
