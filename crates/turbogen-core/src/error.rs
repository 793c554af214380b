//! Unified error handling for turbogen core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single `Result` surface, with suggestions and categories preserved.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ErrorCategory};

/// Root error type for turbogen-core operations.
#[derive(Debug, Error, Clone)]
pub enum TurbogenError {
    /// Errors from the domain layer (validation, rendering rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (templates, filesystem, cwd).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl TurbogenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in turbogen".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Convenient result type alias.
pub type TurbogenResult<T> = Result<T, TurbogenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn categories_flow_through_the_wrapper() {
        let domain: TurbogenError = DomainError::InvalidName {
            name: "x".into(),
            reason: "too short".into(),
        }
        .into();
        assert_eq!(domain.category(), ErrorCategory::Validation);

        let app: TurbogenError = ApplicationError::Filesystem {
            path: PathBuf::from("/tmp/x"),
            reason: "denied".into(),
        }
        .into();
        assert_eq!(app.category(), ErrorCategory::Environment);

        let template: TurbogenError = ApplicationError::TemplateMissing {
            resource: "service.tmpl".into(),
        }
        .into();
        assert_eq!(template.category(), ErrorCategory::Template);
    }

    #[test]
    fn suggestions_are_never_empty() {
        let err: TurbogenError = ApplicationError::CwdUnavailable {
            reason: "gone".into(),
        }
        .into();
        assert!(!err.suggestions().is_empty());
    }
}
