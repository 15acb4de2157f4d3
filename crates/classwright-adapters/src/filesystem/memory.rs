//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use classwright_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ClasswrightResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to a service and inspect
/// the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    /// Writes and directory creation below these prefixes fail.
    read_only: Vec<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Pre-create a directory (and its ancestors).
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            insert_ancestors(&mut inner.directories, path.as_ref());
        }
        self
    }

    /// Pre-create a file; its parent directories are created too.
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        let path = path.as_ref();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Make every path below `prefix` unwritable.
    pub fn with_read_only(self, prefix: impl AsRef<Path>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.push(prefix.as_ref().to_path_buf());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ClasswrightResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        if is_read_only(&inner, path) {
            return Err(read_only_error(path));
        }
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ClasswrightResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        if is_read_only(&inner, path) {
            return Err(read_only_error(path));
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ApplicationError::TargetExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn is_read_only(inner: &MemoryFilesystemInner, path: &Path) -> bool {
    inner.read_only.iter().any(|prefix| path.starts_with(prefix))
}

fn poisoned(path: &Path) -> classwright_core::error::ClasswrightError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "In-memory filesystem lock poisoned".into(),
    }
    .into()
}

fn read_only_error(path: &Path) -> classwright_core::error::ClasswrightError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Read-only location".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/work/src/classes")).unwrap();
        assert!(fs.is_dir(Path::new("/work")));
        assert!(fs.is_dir(Path::new("/work/src")));
        assert!(fs.is_dir(Path::new("/work/src/classes")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/work/a.php"), "x").is_err());

        let fs = fs.with_directory("/work");
        fs.write_file(Path::new("/work/a.php"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/work/a.php")).as_deref(), Some("x"));
        assert!(fs.exists(Path::new("/work/a.php")));
        assert!(!fs.is_dir(Path::new("/work/a.php")));
    }

    #[test]
    fn existing_file_is_kept() {
        let fs = MemoryFilesystem::new().with_file("/work/a.php", "mine");
        let err = fs.write_file(Path::new("/work/a.php"), "x").unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs.read_file(Path::new("/work/a.php")).as_deref(), Some("mine"));
    }

    #[test]
    fn read_only_prefix_rejects_writes() {
        let fs = MemoryFilesystem::new()
            .with_directory("/work")
            .with_read_only("/work/tests");
        assert!(fs.create_dir_all(Path::new("/work/tests/classes")).is_err());
        assert!(fs.create_dir_all(Path::new("/work/src/classes")).is_ok());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("/x")).unwrap();
        assert!(other.is_dir(Path::new("/x")));
    }
}
