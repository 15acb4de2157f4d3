pub mod arguments;
pub mod catalog;
pub mod generated_file;
pub mod render_context;

pub use crate::domain::DomainError;
pub use arguments::{ArgumentSet, RawArguments};
pub use catalog::{TemplateCatalog, TemplateDescriptor};
pub use generated_file::{GeneratedFileSpec, PathResolver};
pub use render_context::RenderContext;
