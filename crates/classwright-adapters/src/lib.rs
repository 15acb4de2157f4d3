//! Infrastructure adapters for classwright.
//!
//! This crate implements the ports defined in `classwright-core::application::ports`.
//! It contains all I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod notifier;
pub mod renderer;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use notifier::{MemoryNotifier, Notice, NoticeLevel};
pub use renderer::PlaceholderRenderer;
pub use template_store::DiskTemplateStore;
