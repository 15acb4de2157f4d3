//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rule violations.
//! Rule violations are `DomainError` from `crate::domain`.
//!
//! None of these stop a generation run: the orchestrator turns each one
//! into a warning and moves on to the next directory or template.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKind;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Template source could not be read.
    #[error("Template {kind} could not be loaded from {path}: {reason}")]
    TemplateUnavailable {
        kind: TemplateKind,
        path: PathBuf,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Something already occupies a file target; it is left untouched.
    #[error("A file already exists at {path}")]
    TargetExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateUnavailable { path, .. } => vec![
                format!("Expected a template at: {}", path.display()),
                "Point --templates-dir at a directory containing the templates".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::TargetExists { path } => {
                vec![format!("Remove {} to regenerate it", path.display())]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateUnavailable { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::TargetExists { .. } => ErrorCategory::Internal,
        }
    }
}
