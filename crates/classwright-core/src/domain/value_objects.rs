//! Domain value objects: Flag, TemplateKind, Category, Role.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each closed set is listed once in an `ALL` constant whose order is part
//! of the observable behaviour (validation order, generation order).

use serde::{Deserialize, Serialize};
use std::fmt;

// ── Flag ──────────────────────────────────────────────────────────────────────

/// One of the five required command-line inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    Name,
    Path,
    RootNamespace,
    SubNamespace,
    BaseTestName,
}

impl Flag {
    /// Validation order. The first missing flag in this order is reported.
    pub const ALL: [Flag; 5] = [
        Self::Name,
        Self::Path,
        Self::RootNamespace,
        Self::SubNamespace,
        Self::BaseTestName,
    ];

    /// Flag name as typed on the command line, without the leading `--`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Path => "path",
            Self::RootNamespace => "rootnamespace",
            Self::SubNamespace => "subnamespace",
            Self::BaseTestName => "basetestname",
        }
    }

    /// Explains what the flag means, shown when it is missing.
    pub const fn explanation(&self) -> &'static str {
        match self {
            Self::Name => "You must specify a --name for the new class.",
            Self::Path => {
                "You must specify a --path that is the full path to the project \
                 the new class will be created for."
            }
            Self::RootNamespace => {
                "You must specify a --rootnamespace. This is the part of the namespace \
                 that precedes the --subnamespace. If the --subnamespace is `Sub\\Namespace` \
                 and the --rootnamespace is `Root\\Namespace` then the complete namespace \
                 would be `Root\\Namespace\\classes\\Sub\\Namespace`."
            }
            Self::SubNamespace => {
                "You must specify a --subnamespace. This is the part of the namespace \
                 that follows the project's root namespace. If the project's root namespace \
                 is `Root\\Namespace` and the --subnamespace is `Sub\\Namespace` then the \
                 complete namespace would be `Root\\Namespace\\classes\\Sub\\Namespace`. \
                 Each `\\`-separated segment also becomes a nested output directory."
            }
            Self::BaseTestName => {
                "You must specify a --basetestname that matches the name of the project's \
                 base test class. That class is expected to already exist at \
                 `tests/<BASETESTNAME>.<ext>`; generated tests extend it."
            }
        }
    }

    /// Sample value used in the usage example.
    const fn example_value(&self) -> &'static str {
        match self {
            Self::Name => "Foo",
            Self::Path => "./path/to/project",
            Self::RootNamespace => "Foo\\\\Bar",
            Self::SubNamespace => "Baz\\\\Bazzer",
            Self::BaseTestName => "ProjectNameTest",
        }
    }

    /// A complete invocation with this flag marked.
    pub fn usage_example(&self) -> String {
        let mut example = String::from("\n\n  classwright \\\n");
        for (index, flag) in Self::ALL.iter().enumerate() {
            let continuation = if index + 1 < Self::ALL.len() { " \\" } else { "" };
            let marker = if flag == self { "    <-- missing" } else { "" };
            example.push_str(&format!(
                "    --{} {}{}{}\n",
                flag.as_str(),
                flag.example_value(),
                continuation,
                marker
            ));
        }
        example
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Category / Role ───────────────────────────────────────────────────────────

/// Top-level output tree a generated file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tests,
    Src,
}

impl Category {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tests => "tests",
            Self::Src => "src",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Second-level output tree: contracts or implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Interfaces,
    Classes,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interfaces => "interfaces",
            Self::Classes => "classes",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TemplateKind ──────────────────────────────────────────────────────────────

/// The four artifacts generated for every new class.
///
/// Closed set: each variant owns exactly one template identifier, one
/// `(Category, Role)` directory rule and one file-name rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKind {
    ClassTestTrait,
    ClassTest,
    Interface,
    Class,
}

impl TemplateKind {
    /// Generation order.
    pub const ALL: [TemplateKind; 4] = [
        Self::ClassTestTrait,
        Self::ClassTest,
        Self::Interface,
        Self::Class,
    ];

    /// Template identifier, i.e. the template's file stem.
    pub const fn template_id(&self) -> &'static str {
        match self {
            Self::ClassTestTrait => "TestTrait",
            Self::ClassTest => "Test",
            Self::Interface => "Interface",
            Self::Class => "Class",
        }
    }

    pub const fn category(&self) -> Category {
        match self {
            Self::ClassTestTrait | Self::ClassTest => Category::Tests,
            Self::Interface | Self::Class => Category::Src,
        }
    }

    pub const fn role(&self) -> Role {
        match self {
            Self::ClassTestTrait | Self::Interface => Role::Interfaces,
            Self::ClassTest | Self::Class => Role::Classes,
        }
    }

    /// Suffix appended to the class name to form the file stem.
    pub const fn file_suffix(&self) -> &'static str {
        match self {
            Self::ClassTestTrait => "TestTrait",
            Self::ClassTest => "Test",
            Self::Interface | Self::Class => "",
        }
    }

    /// Output file name for a class called `name`.
    pub fn file_name(&self, name: &str, extension: &str) -> String {
        format!("{}{}.{}", name, self.file_suffix(), extension)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_validate_in_fixed_order() {
        let names: Vec<_> = Flag::ALL.iter().map(Flag::as_str).collect();
        assert_eq!(
            names,
            ["name", "path", "rootnamespace", "subnamespace", "basetestname"]
        );
    }

    #[test]
    fn every_flag_has_a_distinct_explanation() {
        for (i, a) in Flag::ALL.iter().enumerate() {
            for b in &Flag::ALL[i + 1..] {
                assert_ne!(a.explanation(), b.explanation());
            }
        }
    }

    #[test]
    fn subnamespace_explanation_mentions_root_namespace() {
        assert!(Flag::SubNamespace.explanation().contains("root namespace"));
    }

    #[test]
    fn usage_example_marks_only_the_missing_flag() {
        let example = Flag::RootNamespace.usage_example();
        assert_eq!(example.matches("<-- missing").count(), 1);
        let marked = example.lines().find(|l| l.contains("<-- missing")).unwrap();
        assert!(marked.contains("--rootnamespace"));
    }

    #[test]
    fn template_kinds_map_to_directories() {
        assert_eq!(TemplateKind::ClassTestTrait.category(), Category::Tests);
        assert_eq!(TemplateKind::ClassTestTrait.role(), Role::Interfaces);
        assert_eq!(TemplateKind::ClassTest.category(), Category::Tests);
        assert_eq!(TemplateKind::ClassTest.role(), Role::Classes);
        assert_eq!(TemplateKind::Interface.category(), Category::Src);
        assert_eq!(TemplateKind::Interface.role(), Role::Interfaces);
        assert_eq!(TemplateKind::Class.category(), Category::Src);
        assert_eq!(TemplateKind::Class.role(), Role::Classes);
    }

    #[test]
    fn file_names_follow_kind() {
        assert_eq!(
            TemplateKind::ClassTestTrait.file_name("Widget", "php"),
            "WidgetTestTrait.php"
        );
        assert_eq!(TemplateKind::ClassTest.file_name("Widget", "php"), "WidgetTest.php");
        assert_eq!(TemplateKind::Interface.file_name("Widget", "php"), "Widget.php");
        assert_eq!(TemplateKind::Class.file_name("Widget", "php"), "Widget.php");
    }
}
