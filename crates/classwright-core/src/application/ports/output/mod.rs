//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `classwright-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RenderContext, TemplateDescriptor, TemplateKind};
use crate::error::ClasswrightResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `classwright_adapters::filesystem::LocalFilesystem` (production)
/// - `classwright_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ClasswrightResult<()>;

    /// Create a new file holding `content`.
    ///
    /// Never replaces an existing entry: fails with
    /// [`ApplicationError::TargetExists`](crate::application::ApplicationError::TargetExists)
    /// when something is already at `path`.
    fn write_file(&self, path: &Path, content: &str) -> ClasswrightResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template source retrieval.
///
/// Implemented by:
/// - `classwright_adapters::template_store::DiskTemplateStore` (installed templates, built-in fallback)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Read the raw template text for a descriptor.
    fn load(&self, descriptor: &TemplateDescriptor) -> ClasswrightResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `classwright_adapters::renderer::PlaceholderRenderer` (token substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render template text for `kind` using `context`.
    fn render(
        &self,
        kind: TemplateKind,
        template: &str,
        context: &RenderContext,
    ) -> ClasswrightResult<String>;
}

/// Port for user-facing notifications.
///
/// The core never formats for a terminal; it hands plain sentences to the
/// notifier, in the order they happen.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);

    /// A recovered problem: the run continues.
    fn warn(&self, message: &str);

    fn error(&self, message: &str);
}
