//! # loglint-core
//!
//! Core framework for linting log message literals, based on `syn` AST
//! analysis.
//!
//! The pipeline: the [`Analyzer`] walks every method call in a file, the
//! classifier ([`classify::is_log_call`]) decides whether the call invokes a
//! recognized logging API (consulting the injected [`TypeQuery`] for receiver
//! identity), the extractor ([`extract::collect_messages`]) pulls the literal
//! message text, and each registered [`Rule`] validates the text and reports
//! [`Violation`]s, optionally carrying an automatic fix.
//!
//! Classification and extraction fail open: calls without type information,
//! non-literal message arguments, and unrecognized receivers are silently
//! skipped, never reported as errors.
//!
//! ## Example
//!
//! ```ignore
//! use loglint_core::{Analyzer, Config};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .config(Config::resolve(None))
//!     .rule(my_rule)
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// Call-site classification: severity methods and logger capabilities.
pub mod classify;
/// Literal message extraction from recognized log calls.
pub mod extract;
/// The injected type-query seam and its binding-table implementation.
pub mod typequery;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, RuleToggles};
pub use context::FileContext;
pub use extract::ExtractedMessage;
pub use rule::{Rule, RuleBox};
pub use typequery::{NamedType, Resolution, StaticTypeIndex, TypeQuery, TypeRef};
pub use types::{LintResult, Location, Replacement, Severity, Suggestion, Violation};
