//! Application layer for classwright.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! path or rendering rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerateService,
    GenerationOptions,
    GenerationReport, // DTO for run results
    GenerationStage,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Notifier, TemplateRenderer, TemplateStore};

pub use error::ApplicationError;
