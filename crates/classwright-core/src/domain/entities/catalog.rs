//! Fixed mapping from [`TemplateKind`] to template source files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::TemplateKind;

/// A template kind paired with the file its source is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub kind: TemplateKind,
    pub path: PathBuf,
}

/// Catalog of the four templates, rooted at an installation `templates`
/// directory.
///
/// Template files are named `<template id>.<extension>`, e.g. `TestTrait.php`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates_dir: PathBuf,
    extension: String,
}

impl TemplateCatalog {
    pub fn new(templates_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Extension shared by templates and generated files.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn descriptor(&self, kind: TemplateKind) -> TemplateDescriptor {
        TemplateDescriptor {
            kind,
            path: self
                .templates_dir
                .join(format!("{}.{}", kind.template_id(), self.extension)),
        }
    }

    /// All descriptors, in generation order.
    pub fn descriptors(&self) -> Vec<TemplateDescriptor> {
        TemplateKind::ALL
            .into_iter()
            .map(|kind| self.descriptor(kind))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_follow_generation_order() {
        let catalog = TemplateCatalog::new("/opt/classwright/templates", "php");
        let kinds: Vec<_> = catalog.descriptors().into_iter().map(|d| d.kind).collect();
        assert_eq!(kinds, TemplateKind::ALL);
    }

    #[test]
    fn descriptor_path_uses_template_id_and_extension() {
        let catalog = TemplateCatalog::new("/opt/classwright/templates", "php");
        assert_eq!(
            catalog.descriptor(TemplateKind::ClassTestTrait).path,
            Path::new("/opt/classwright/templates/TestTrait.php")
        );
        assert_eq!(
            catalog.descriptor(TemplateKind::Class).path,
            Path::new("/opt/classwright/templates/Class.php")
        );
    }
}
