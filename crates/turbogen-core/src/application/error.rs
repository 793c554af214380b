//! Application layer errors.
//!
//! These errors represent failures in orchestration and the environment,
//! not business logic. Business-rule errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur while driving one generation run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A referenced template resource does not exist in the provider.
    #[error("template resource not found: {resource}")]
    TemplateMissing { resource: String },

    /// Filesystem operation failed (directory creation, file write).
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The current working directory could not be determined.
    #[error("could not determine current working directory: {reason}")]
    CwdUnavailable { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateMissing { resource } => vec![
                format!("No bundled template named '{}'", resource),
                "This is a packaging problem - please report it".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CwdUnavailable { .. } => vec![
                "The working directory may have been deleted".into(),
                "cd into a valid directory and retry".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateMissing { .. } => ErrorCategory::Template,
            Self::Filesystem { .. } | Self::CwdUnavailable { .. } => ErrorCategory::Environment,
        }
    }
}
