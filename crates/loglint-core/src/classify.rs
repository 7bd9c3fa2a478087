//! Call-site classification: which method calls are log calls.

use crate::typequery::{Resolution, TypeQuery, TypeRef};
use syn::{Expr, ExprMethodCall, Ident};

/// Severity-level method names recognized on logger receivers.
///
/// Matching is case-sensitive and exact; any other method name disqualifies
/// the call regardless of receiver type.
pub const SEVERITY_METHODS: [&str; 6] = ["Debug", "Info", "Warn", "Error", "Fatal", "Panic"];

/// Import paths of the standard logging packages.
pub const STD_LOG_PACKAGES: [&str; 2] = ["log", "log/slog"];

/// A recognized logger capability: a type whose severity methods are log calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerCapability {
    /// Import path of the defining package.
    pub package: &'static str,
    /// Type name within that package.
    pub type_name: &'static str,
}

/// Types recognized as loggers.
pub const LOGGER_TYPES: [LoggerCapability; 3] = [
    LoggerCapability {
        package: "go.uber.org/zap",
        type_name: "Logger",
    },
    LoggerCapability {
        package: "go.uber.org/zap",
        type_name: "SugaredLogger",
    },
    LoggerCapability {
        package: "log/slog",
        type_name: "Logger",
    },
];

/// Returns true if the method call is a recognized log call.
///
/// Classification never errors: whenever the type query cannot resolve the
/// receiver, the call simply does not qualify.
#[must_use]
pub fn is_log_call(call: &ExprMethodCall, types: &dyn TypeQuery) -> bool {
    if !is_severity_method(&call.method) {
        return false;
    }

    is_std_package_receiver(&call.receiver, types) || is_logger_receiver(&call.receiver, types)
}

/// Returns true if the method name is one of the severity-level names.
fn is_severity_method(method: &Ident) -> bool {
    SEVERITY_METHODS.iter().any(|name| method == name)
}

/// Returns true if the receiver resolves to one of the standard logging
/// packages (a package reference, not a value).
fn is_std_package_receiver(receiver: &Expr, types: &dyn TypeQuery) -> bool {
    match types.resolve_receiver(receiver) {
        Some(Resolution::Package(path)) => STD_LOG_PACKAGES.contains(&path.as_str()),
        _ => false,
    }
}

/// Returns true if the receiver's static type, after stripping one level of
/// pointer indirection, is a recognized logger type.
fn is_logger_receiver(receiver: &Expr, types: &dyn TypeQuery) -> bool {
    let Some(Resolution::Value(ty)) = types.resolve_receiver(receiver) else {
        return false;
    };

    let TypeRef::Named(named) = ty.strip_pointer() else {
        return false;
    };

    LOGGER_TYPES
        .iter()
        .any(|cap| cap.package == named.package && cap.type_name == named.name)
}
