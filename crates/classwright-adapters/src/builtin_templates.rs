//! Templates compiled into the binary.
//!
//! The workspace `templates/` directory is embedded with `include_str!` so
//! a bare binary can still generate files when no `templates` directory is
//! installed next to it. Files on disk always take precedence; see
//! [`crate::template_store::DiskTemplateStore`].

use classwright_core::domain::TemplateKind;

const TEST_TRAIT: &str = include_str!("../../../templates/TestTrait.php");
const TEST: &str = include_str!("../../../templates/Test.php");
const INTERFACE: &str = include_str!("../../../templates/Interface.php");
const CLASS: &str = include_str!("../../../templates/Class.php");

/// Extension the built-in templates are written for.
pub const BUILTIN_EXTENSION: &str = "php";

/// Embedded source for `kind`.
pub const fn builtin(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::ClassTestTrait => TEST_TRAIT,
        TemplateKind::ClassTest => TEST,
        TemplateKind::Interface => INTERFACE,
        TemplateKind::Class => CLASS,
    }
}
