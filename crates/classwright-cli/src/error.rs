//! Error handling for the classwright CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use classwright_core::domain::DomainError;
use classwright_core::error::ClasswrightError;

// Re-export so callers only need `use crate::error::*`.
pub use classwright_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required class flag was absent or empty.
    #[error("Missing required argument --{flag}")]
    MissingArgument {
        flag: String,
        explanation: String,
        example: String,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed, or a key is unknown.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// Any other error propagated from `classwright-core`.
    #[error("Generation failed: {0}")]
    Core(ClasswrightError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<ClasswrightError> for CliError {
    fn from(err: ClasswrightError) -> Self {
        match err {
            ClasswrightError::Domain(DomainError::MissingArgument { flag }) => {
                CliError::MissingArgument {
                    flag: flag.to_string(),
                    explanation: flag.explanation().to_string(),
                    example: flag.usage_example(),
                }
            }
            other => CliError::Core(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument {
                explanation,
                example,
                ..
            } => vec![explanation.clone(), format!("For example:{example}")],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Run 'classwright config path' to see which file is read".into(),
                "Environment variables use the CLASSWRIGHT_ prefix, e.g. CLASSWRIGHT_GENERATION__EXTENSION".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::NotFound => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  1   |
    /// | Internal      |  1   |
    /// | Configuration |  4   |
    ///
    /// Code 2 is left to clap for command lines it cannot parse.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::Internal => 1,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));

        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                push_indented(&mut output, &suggestion);
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`]; no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                push_indented(&mut out, s);
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Multi-line suggestions (usage examples) keep their own layout.
fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str(&format!("  {line}\n"));
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (a required flag is missing).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use classwright_core::application::ApplicationError;
    use classwright_core::domain::{Flag, TemplateKind};
    use std::io;
    use std::path::PathBuf;

    fn missing(flag: Flag) -> CliError {
        ClasswrightError::from(DomainError::MissingArgument { flag }).into()
    }

    // ── conversion ────────────────────────────────────────────────────────

    #[test]
    fn missing_argument_keeps_flag_details() {
        match missing(Flag::SubNamespace) {
            CliError::MissingArgument {
                flag,
                explanation,
                example,
            } => {
                assert_eq!(flag, "subnamespace");
                assert!(explanation.starts_with("You must specify a --subnamespace"));
                assert!(example.contains("--subnamespace Baz\\\\Bazzer \\    <-- missing"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn other_core_errors_stay_core() {
        let err: CliError = ClasswrightError::from(ApplicationError::TemplateUnavailable {
            kind: TemplateKind::Class,
            path: PathBuf::from("/t/Class.php"),
            reason: "denied".into(),
        })
        .into();
        assert!(matches!(err, CliError::Core(_)));
        assert!(err.suggestions()[0].contains("/t/Class.php"));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_missing_argument() {
        assert_eq!(missing(Flag::Name).exit_code(), 1);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_shows_explanation_and_example() {
        let s = missing(Flag::BaseTestName).format_plain(false);
        assert!(s.contains("Error: Missing required argument --basetestname"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("base test class"));
        assert!(s.contains("classwright \\"));
        assert!(s.contains("--basetestname ProjectNameTest    <-- missing"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = missing(Flag::Name).format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "writing".into(),
            source: io::Error::other("disk full"),
        };
        assert!(err.format_plain(true).contains("Caused by: disk full"));
    }
}
