//! Output path rules.
//!
//! Every output location is a pure function of the [`ArgumentSet`] and a
//! `(Category, Role)` pair:
//!
//! ```text
//! <root>/<category>/<role>/<sub namespace as path>/<file name>
//!
//! tests/interfaces/<sub>/<Name>TestTrait.<ext>   ClassTestTrait
//! tests/classes/<sub>/<Name>Test.<ext>           ClassTest
//! src/interfaces/<sub>/<Name>.<ext>              Interface
//! src/classes/<sub>/<Name>.<ext>                 Class
//! ```
//!
//! Every derived path stays under `<root>`: the sub namespace contributes
//! plain components only, and the file name must be a single component.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::{arguments::ArgumentSet, catalog::TemplateDescriptor},
    error::DomainError,
    value_objects::{Category, Role, TemplateKind},
};

/// Hierarchy delimiter inside a namespace string.
pub const NAMESPACE_DELIMITER: char = '\\';

/// The four directories a run needs, in creation order.
pub const REQUIRED_DIRECTORIES: [(Category, Role); 4] = [
    (Category::Tests, Role::Interfaces),
    (Category::Tests, Role::Classes),
    (Category::Src, Role::Interfaces),
    (Category::Src, Role::Classes),
];

/// Derives output directories and file targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    extension: String,
}

impl PathResolver {
    /// Shown when no target can be derived for a template.
    pub const UNRESOLVED_TARGET_HINT: &'static str = "You must specify a --name and --subnamespace.";

    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
        }
    }

    /// Translate `Foo\Bar` into the relative path `Foo/Bar`.
    ///
    /// Empty segments are dropped, so `Foo\\Bar` (a doubled delimiter) maps
    /// to the same directory. A leading `/` or `\` and `.` segments are
    /// dropped too; `..` is rejected.
    pub fn sub_namespace_as_path(sub_namespace: &str) -> Result<PathBuf, DomainError> {
        let mut path = PathBuf::new();
        for segment in sub_namespace.split(NAMESPACE_DELIMITER) {
            for component in Path::new(segment).components() {
                match component {
                    Component::Normal(part) => path.push(part),
                    Component::ParentDir => {
                        return Err(DomainError::SubNamespaceEscapesRoot {
                            sub_namespace: sub_namespace.to_string(),
                        });
                    }
                    Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
                }
            }
        }

        if path.as_os_str().is_empty() {
            return Err(DomainError::EmptySubNamespace {
                sub_namespace: sub_namespace.to_string(),
            });
        }
        Ok(path)
    }

    pub fn directory_for(
        &self,
        category: Category,
        role: Role,
        args: &ArgumentSet,
    ) -> Result<PathBuf, DomainError> {
        let sub = Self::sub_namespace_as_path(args.sub_namespace())?;
        Ok(args
            .path()
            .join(category.as_str())
            .join(role.as_str())
            .join(sub))
    }

    /// Every directory in [`REQUIRED_DIRECTORIES`] order.
    ///
    /// Fails when any file target is underivable, so nothing is created for
    /// an argument set that cannot be written.
    pub fn required_directories(&self, args: &ArgumentSet) -> Result<Vec<PathBuf>, DomainError> {
        for kind in TemplateKind::ALL {
            self.file_name_for(kind, args)?;
        }
        REQUIRED_DIRECTORIES
            .into_iter()
            .map(|(category, role)| self.directory_for(category, role, args))
            .collect()
    }

    pub fn file_target_for(
        &self,
        kind: TemplateKind,
        args: &ArgumentSet,
    ) -> Result<PathBuf, DomainError> {
        let directory = self.directory_for(kind.category(), kind.role(), args)?;
        Ok(directory.join(self.file_name_for(kind, args)?))
    }

    fn file_name_for(&self, kind: TemplateKind, args: &ArgumentSet) -> Result<String, DomainError> {
        let file_name = kind.file_name(args.name(), &self.extension);
        let mut components = Path::new(&file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None)
                if part == file_name.as_str() && !file_name.contains(NAMESPACE_DELIMITER) =>
            {
                Ok(file_name)
            }
            _ => Err(DomainError::InvalidFileName { file_name }),
        }
    }
}

/// Everything needed to produce one output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFileSpec {
    pub kind: TemplateKind,
    pub source_template_path: PathBuf,
    pub target_path: PathBuf,
    pub target_directory: PathBuf,
}

impl GeneratedFileSpec {
    pub fn derive(
        descriptor: &TemplateDescriptor,
        resolver: &PathResolver,
        args: &ArgumentSet,
    ) -> Result<Self, DomainError> {
        let kind = descriptor.kind;
        Ok(Self {
            kind,
            source_template_path: descriptor.path.clone(),
            target_path: resolver.file_target_for(kind, args)?,
            target_directory: resolver.directory_for(kind.category(), kind.role(), args)?,
        })
    }
}
