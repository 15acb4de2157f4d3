//! Placeholder substitution.
//!
//! Templates are plain text containing fixed tokens. Rendering is literal
//! find/replace: no conditionals, loops or escaping.
//!
//! ## Tokens
//!
//! | Token | Value |
//! |-------|-------|
//! | `__BASE_TEST_NAME__` | `--basetestname` |
//! | `__ROOT_NAMESPACE__` | `--rootnamespace` |
//! | `__TARGET_CLASS_NAME__` | `--name` |
//! | `__SUB_NAMESPACE__` | `--subnamespace` (delimiters kept) |
//! | `__LC_TARGET_CLASS_NAME__` | `--name`, first letter lowercased |

use crate::domain::entities::arguments::ArgumentSet;

pub const BASE_TEST_NAME: &str = "__BASE_TEST_NAME__";
pub const ROOT_NAMESPACE: &str = "__ROOT_NAMESPACE__";
pub const TARGET_CLASS_NAME: &str = "__TARGET_CLASS_NAME__";
pub const SUB_NAMESPACE: &str = "__SUB_NAMESPACE__";
pub const LC_TARGET_CLASS_NAME: &str = "__LC_TARGET_CLASS_NAME__";

/// Every token a template may contain.
pub const PLACEHOLDERS: [&str; 5] = [
    BASE_TEST_NAME,
    ROOT_NAMESPACE,
    TARGET_CLASS_NAME,
    SUB_NAMESPACE,
    LC_TARGET_CLASS_NAME,
];

/// Token → value pairs for one run.
///
/// Immutable after creation; built once from the [`ArgumentSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    values: [(&'static str, String); 5],
}

impl RenderContext {
    pub fn new(args: &ArgumentSet) -> Self {
        Self {
            values: [
                (BASE_TEST_NAME, args.base_test_name().to_string()),
                (ROOT_NAMESPACE, args.root_namespace().to_string()),
                (TARGET_CLASS_NAME, args.name().to_string()),
                (SUB_NAMESPACE, args.sub_namespace().to_string()),
                (LC_TARGET_CLASS_NAME, args.lc_first_name()),
            ],
        }
    }

    /// Value substituted for `token`.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every token occurrence in one left-to-right scan.
    ///
    /// Substituted values are never rescanned, so a value that happens to
    /// contain a token is emitted verbatim. Unknown `__WORDS__` are left
    /// untouched.
    pub fn render(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("__") {
            output.push_str(&rest[..start]);
            let candidate = &rest[start..];

            match self
                .values
                .iter()
                .find(|(token, _)| candidate.starts_with(token))
            {
                Some((token, value)) => {
                    output.push_str(value);
                    rest = &candidate[token.len()..];
                }
                None => {
                    // Advance one underscore so `___TOKEN__` still matches.
                    output.push('_');
                    rest = &candidate[1..];
                }
            }
        }

        output.push_str(rest);
        output
    }
}

/// Tokens still present in `text`.
pub fn residual_placeholders(text: &str) -> Vec<&'static str> {
    PLACEHOLDERS
        .into_iter()
        .filter(|token| text.contains(token))
        .collect()
}
