// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use super::{entities::PathResolver, value_objects::Flag};
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A required flag was absent or carried no value.
    #[error("Missing required argument --{flag}")]
    MissingArgument { flag: Flag },

    /// The sub namespace contains delimiters only, so no directory can be derived.
    #[error("Sub namespace '{sub_namespace}' does not resolve to a directory")]
    EmptySubNamespace { sub_namespace: String },

    /// The sub namespace climbs out of its directory (`..`).
    #[error("Sub namespace '{sub_namespace}' may not contain '..'")]
    SubNamespaceEscapesRoot { sub_namespace: String },

    /// The output file name would not be a single path component.
    #[error("'{file_name}' is not a plain file name")]
    InvalidFileName { file_name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { flag } => vec![
                flag.explanation().to_string(),
                format!("For example:{}", flag.usage_example()),
            ],
            Self::EmptySubNamespace { .. } => {
                vec![PathResolver::UNRESOLVED_TARGET_HINT.into()]
            }
            Self::SubNamespaceEscapesRoot { .. } => {
                vec!["Separate namespace levels with \\, e.g. Foo\\Bar".into()]
            }
            Self::InvalidFileName { .. } => {
                vec!["--name is a class name and may not contain / or \\".into()]
            }
        }
    }

    /// Every domain error is a validation failure.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. }
            | Self::EmptySubNamespace { .. }
            | Self::SubNamespaceEscapesRoot { .. }
            | Self::InvalidFileName { .. } => ErrorCategory::Validation,
        }
    }
}
