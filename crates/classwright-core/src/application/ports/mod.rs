//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `classwright-adapters` (and the
//! CLI, for `Notifier`) implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `TemplateStore`: Template source retrieval
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `Notifier`: User-visible progress and warnings
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`GenerateService::generate`, called by the CLI)

pub mod output;

pub use output::{Filesystem, Notifier, TemplateRenderer, TemplateStore};

#[cfg(test)]
pub use output::{MockFilesystem, MockNotifier, MockTemplateRenderer, MockTemplateStore};
