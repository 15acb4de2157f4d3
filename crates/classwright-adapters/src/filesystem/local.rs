//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::trace;

use classwright_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ClasswrightError, ClasswrightResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ClasswrightResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ClasswrightResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => ApplicationError::TargetExists {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => map_io_error(path, e, "write file"),
            })?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ClasswrightError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
