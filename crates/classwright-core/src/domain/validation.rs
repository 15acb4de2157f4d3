use std::path::{MAIN_SEPARATOR_STR, Path};

use crate::domain::{
    entities::{ArgumentSet, RawArguments},
    error::DomainError,
};

/// Project roots that are never written into, whatever exists on disk.
pub const FORBIDDEN_ROOTS: [&str; 3] = ["", "/", "/home"];

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_arguments(raw: RawArguments) -> Result<ArgumentSet, DomainError> {
        raw.validate()
    }

    /// `true` when `path` may not serve as a project root regardless of
    /// whether it exists: empty, the platform separator, `/` or `/home`.
    pub fn is_forbidden_root(path: &Path) -> bool {
        let Some(path) = path.to_str() else {
            return false;
        };
        path == MAIN_SEPARATOR_STR || FORBIDDEN_ROOTS.contains(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_roots() {
        assert!(DomainValidator::is_forbidden_root(Path::new("")));
        assert!(DomainValidator::is_forbidden_root(Path::new("/")));
        assert!(DomainValidator::is_forbidden_root(Path::new("/home")));
        assert!(DomainValidator::is_forbidden_root(Path::new(MAIN_SEPARATOR_STR)));
    }

    #[test]
    fn ordinary_roots_are_allowed() {
        assert!(!DomainValidator::is_forbidden_root(Path::new("/home/dev/project")));
        assert!(!DomainValidator::is_forbidden_root(Path::new("./")));
        assert!(!DomainValidator::is_forbidden_root(Path::new("/srv")));
    }
}
