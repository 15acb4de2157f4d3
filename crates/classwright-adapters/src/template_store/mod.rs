//! Template store adapters.

mod disk;

pub use disk::DiskTemplateStore;
