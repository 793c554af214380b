//! Domain error types.

use std::path::PathBuf;
use thiserror::Error;

/// Business-rule violations: bad input or a bad place to run from.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provide suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid entity name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("unknown entity kind '{kind}'")]
    UnknownEntityKind { kind: String },

    #[error("cannot create {kind} from {cwd}: expected {expected}")]
    WrongLocation {
        kind: String,
        cwd: PathBuf,
        expected: String,
    },

    #[error("unresolved placeholder '{{{{{placeholder}}}}}' in template {resource}")]
    UnresolvedPlaceholder {
        placeholder: String,
        resource: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { reason, .. } => vec![
                format!("Name rejected: {}", reason),
                "Use at least 3 characters, e.g. 'checkout'".into(),
            ],
            Self::UnknownEntityKind { kind } => vec![
                format!("'{}' is not a scaffoldable kind", kind),
                "Supported kinds: app, package, controller, service, middleware".into(),
            ],
            Self::WrongLocation { expected, .. } => vec![
                format!("Run this command from {}", expected),
                "Nothing was created".into(),
            ],
            Self::UnresolvedPlaceholder { resource, .. } => vec![
                format!("Template '{}' references a variable turbogen does not supply", resource),
                "If this is a built-in template, please report it as a bug".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::UnknownEntityKind { .. }
            | Self::WrongLocation { .. } => ErrorCategory::Validation,
            Self::UnresolvedPlaceholder { .. } => ErrorCategory::Template,
        }
    }
}

/// Coarse error classes, mirrored by the CLI's exit-code map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Usage/validation errors - bad name, wrong directory.
    Validation,
    /// Template errors - missing resource, render failure.
    Template,
    /// Environment errors - filesystem, cwd.
    Environment,
    /// Unexpected internal errors.
    Internal,
}
