//! Core domain layer for classwright.
//!
//! This module contains pure rules with ZERO I/O. Reading templates,
//! touching the filesystem and talking to the user all happen through ports
//! defined in the application layer.
//!
//! ## What lives here
//!
//! - **Arguments**: `RawArguments` → `ArgumentSet` (presence, order, non-emptiness)
//! - **Value objects**: `Flag`, `TemplateKind`, `Category`, `Role`
//! - **Catalog**: `TemplateKind` → template file
//! - **Path rules**: `PathResolver`, `GeneratedFileSpec`
//! - **Rendering**: `RenderContext` (five-token substitution)
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    arguments::{ArgumentSet, RawArguments},
    catalog::{TemplateCatalog, TemplateDescriptor},
    generated_file::{GeneratedFileSpec, NAMESPACE_DELIMITER, PathResolver, REQUIRED_DIRECTORIES},
    render_context::{PLACEHOLDERS, RenderContext, residual_placeholders},
};

pub use error::DomainError;

pub use value_objects::{Category, Flag, Role, TemplateKind};

pub use validation::{DomainValidator, FORBIDDEN_ROOTS};
