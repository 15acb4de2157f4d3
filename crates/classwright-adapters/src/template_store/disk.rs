//! Template store reading installed template files.

use std::io;

use tracing::{debug, instrument};

use classwright_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::TemplateDescriptor,
    error::ClasswrightResult,
};

use crate::builtin_templates::{self, BUILTIN_EXTENSION};

/// Reads `descriptor.path` from disk.
///
/// When the file does not exist and the descriptor asks for a `.php`
/// template, the embedded copy is returned instead. Any other read failure
/// (permissions, invalid UTF-8, ...) is an error.
#[derive(Debug, Clone, Copy)]
pub struct DiskTemplateStore {
    builtin_fallback: bool,
}

impl DiskTemplateStore {
    /// Store with the built-in fallback enabled.
    pub fn new() -> Self {
        Self {
            builtin_fallback: true,
        }
    }
}

impl Default for DiskTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore for DiskTemplateStore {
    #[instrument(skip_all, fields(kind = %descriptor.kind, path = %descriptor.path.display()))]
    fn load(&self, descriptor: &TemplateDescriptor) -> ClasswrightResult<String> {
        match std::fs::read_to_string(&descriptor.path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound && self.builtin_applies(descriptor) => {
                debug!("Template not installed, using built-in copy");
                Ok(builtin_templates::builtin(descriptor.kind).to_string())
            }
            Err(e) => Err(ApplicationError::TemplateUnavailable {
                kind: descriptor.kind,
                path: descriptor.path.clone(),
                reason: e.to_string(),
            }
            .into()),
        }
    }
}

impl DiskTemplateStore {
    fn builtin_applies(&self, descriptor: &TemplateDescriptor) -> bool {
        self.builtin_fallback
            && descriptor
                .path
                .extension()
                .is_some_and(|ext| ext == BUILTIN_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use classwright_core::domain::{TemplateCatalog, TemplateKind};

    use super::*;

    #[test]
    fn reads_installed_template() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("Class.php"), "custom __TARGET_CLASS_NAME__").unwrap();

        let catalog = TemplateCatalog::new(temp.path(), "php");
        let content = DiskTemplateStore::new()
            .load(&catalog.descriptor(TemplateKind::Class))
            .unwrap();
        assert_eq!(content, "custom __TARGET_CLASS_NAME__");
    }

    #[test]
    fn missing_template_falls_back_to_builtin() {
        let temp = tempfile::tempdir().unwrap();
        let catalog = TemplateCatalog::new(temp.path(), "php");
        let content = DiskTemplateStore::new()
            .load(&catalog.descriptor(TemplateKind::Interface))
            .unwrap();
        assert_eq!(content, builtin_templates::builtin(TemplateKind::Interface));
    }

    #[test]
    fn fallback_disabled_reports_missing_template() {
        let temp = tempfile::tempdir().unwrap();
        let catalog = TemplateCatalog::new(temp.path(), "php");
        let store = DiskTemplateStore {
            builtin_fallback: false,
        };
        let err = store
            .load(&catalog.descriptor(TemplateKind::ClassTest))
            .unwrap_err();
        assert!(err.to_string().contains("Test.php"));
    }

    #[test]
    fn no_builtin_for_other_extensions() {
        let temp = tempfile::tempdir().unwrap();
        let catalog = TemplateCatalog::new(temp.path(), "hack");
        assert!(
            DiskTemplateStore::new()
                .load(&catalog.descriptor(TemplateKind::Class))
                .is_err()
        );
    }
}
