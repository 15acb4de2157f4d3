//! Command-line inputs before and after validation.
//!
//! [`RawArguments`] is whatever the driving adapter collected; every field is
//! optional. [`RawArguments::validate`] turns it into an [`ArgumentSet`], the
//! single typed record every later stage reads. An `ArgumentSet` is never
//! mutated; the only transformation, [`ArgumentSet::with_root`], consumes it
//! and returns a new one.
//!
//! # Domain purity
//!
//! Validation here is purely syntactic (presence and non-emptiness). Whether
//! `path` names an existing directory needs I/O and is decided by the
//! application layer through the `Filesystem` port.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, value_objects::Flag};

/// Unvalidated inputs, one slot per [`Flag`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArguments {
    pub name: Option<String>,
    pub path: Option<String>,
    pub root_namespace: Option<String>,
    pub sub_namespace: Option<String>,
    pub base_test_name: Option<String>,
}

impl RawArguments {
    /// Value supplied for `flag`, if any.
    pub fn get(&self, flag: Flag) -> Option<&str> {
        match flag {
            Flag::Name => self.name.as_deref(),
            Flag::Path => self.path.as_deref(),
            Flag::RootNamespace => self.root_namespace.as_deref(),
            Flag::SubNamespace => self.sub_namespace.as_deref(),
            Flag::BaseTestName => self.base_test_name.as_deref(),
        }
    }

    /// Check every flag in [`Flag::ALL`] order and stop at the first gap.
    ///
    /// `path` only has to be present: an empty path is not rejected here
    /// because an unusable root is recovered from later, not reported.
    pub fn validate(self) -> Result<ArgumentSet, DomainError> {
        if let Some(flag) = Flag::ALL.into_iter().find(|flag| !self.satisfies(*flag)) {
            return Err(DomainError::MissingArgument { flag });
        }

        // Every slot is Some past this point.
        Ok(ArgumentSet {
            name: self.name.unwrap_or_default(),
            path: PathBuf::from(self.path.unwrap_or_default()),
            root_namespace: self.root_namespace.unwrap_or_default(),
            sub_namespace: self.sub_namespace.unwrap_or_default(),
            base_test_name: self.base_test_name.unwrap_or_default(),
        })
    }

    fn satisfies(&self, flag: Flag) -> bool {
        match (flag, self.get(flag)) {
            (_, None) => false,
            (Flag::Path, Some(_)) => true,
            (_, Some(value)) => !value.is_empty(),
        }
    }
}

/// Validated inputs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentSet {
    name: String,
    path: PathBuf,
    root_namespace: String,
    sub_namespace: String,
    base_test_name: String,
}

impl ArgumentSet {
    /// Target class name, e.g. `Widget`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project root the output tree is written under.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn root_namespace(&self) -> &str {
        &self.root_namespace
    }

    /// `\`-delimited namespace below the root namespace.
    pub fn sub_namespace(&self) -> &str {
        &self.sub_namespace
    }

    pub fn base_test_name(&self) -> &str {
        &self.base_test_name
    }

    /// `name` with its first character lowercased (`Widget` → `widget`).
    pub fn lc_first_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Replace the project root, consuming self.
    pub fn with_root(self, root: impl Into<PathBuf>) -> Self {
        Self {
            path: root.into(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RawArguments {
        RawArguments {
            name: Some("Widget".into()),
            path: Some("/srv/project".into()),
            root_namespace: Some("App".into()),
            sub_namespace: Some("Sub\\Ns".into()),
            base_test_name: Some("AppTest".into()),
        }
    }

    #[test]
    fn complete_arguments_validate() {
        let args = complete().validate().unwrap();
        assert_eq!(args.name(), "Widget");
        assert_eq!(args.path(), Path::new("/srv/project"));
        assert_eq!(args.root_namespace(), "App");
        assert_eq!(args.sub_namespace(), "Sub\\Ns");
        assert_eq!(args.base_test_name(), "AppTest");
    }

    #[test]
    fn each_missing_flag_is_reported() {
        for flag in Flag::ALL {
            let mut raw = complete();
            match flag {
                Flag::Name => raw.name = None,
                Flag::Path => raw.path = None,
                Flag::RootNamespace => raw.root_namespace = None,
                Flag::SubNamespace => raw.sub_namespace = None,
                Flag::BaseTestName => raw.base_test_name = None,
            }
            assert_eq!(
                raw.validate(),
                Err(DomainError::MissingArgument { flag }),
                "flag {flag}"
            );
        }
    }

    #[test]
    fn first_missing_flag_wins() {
        let raw = RawArguments {
            name: Some("Widget".into()),
            ..RawArguments::default()
        };
        assert_eq!(
            raw.validate(),
            Err(DomainError::MissingArgument { flag: Flag::Path })
        );
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let raw = RawArguments {
            sub_namespace: Some(String::new()),
            ..complete()
        };
        assert_eq!(
            raw.validate(),
            Err(DomainError::MissingArgument {
                flag: Flag::SubNamespace
            })
        );
    }

    #[test]
    fn empty_path_is_accepted() {
        let raw = RawArguments {
            path: Some(String::new()),
            ..complete()
        };
        assert_eq!(raw.validate().unwrap().path(), Path::new(""));
    }

    #[test]
    fn lc_first_lowercases_only_the_first_character() {
        let args = complete().validate().unwrap();
        assert_eq!(args.lc_first_name(), "widget");

        let args = RawArguments {
            name: Some("HTTPClient".into()),
            ..complete()
        }
        .validate()
        .unwrap();
        assert_eq!(args.lc_first_name(), "hTTPClient");
    }

    #[test]
    fn with_root_keeps_other_fields() {
        let args = complete().validate().unwrap().with_root("/tmp/fallback");
        assert_eq!(args.path(), Path::new("/tmp/fallback"));
        assert_eq!(args.name(), "Widget");
    }
}
