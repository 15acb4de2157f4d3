//! Token substitution renderer.

use tracing::{debug, instrument};

use classwright_core::{
    application::ports::TemplateRenderer,
    domain::{RenderContext, TemplateKind},
    error::ClasswrightResult,
};

/// Replaces the five `__TOKEN__` placeholders and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    /// Create a new placeholder renderer.
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    #[instrument(skip_all, fields(kind = %kind))]
    fn render(
        &self,
        kind: TemplateKind,
        template: &str,
        context: &RenderContext,
    ) -> ClasswrightResult<String> {
        let rendered = context.render(template);
        debug!(bytes = rendered.len(), "Rendered template");
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use classwright_core::domain::{RawArguments, residual_placeholders};

    use super::*;
    use crate::builtin_templates;

    fn context() -> RenderContext {
        let args = RawArguments {
            name: Some("Widget".into()),
            path: Some("/work".into()),
            root_namespace: Some("App".into()),
            sub_namespace: Some("Sub\\Ns".into()),
            base_test_name: Some("AppTest".into()),
        }
        .validate()
        .unwrap();
        RenderContext::new(&args)
    }

    #[test]
    fn builtin_templates_render_without_residue() {
        let renderer = PlaceholderRenderer::new();
        let ctx = context();

        for kind in TemplateKind::ALL {
            let out = renderer
                .render(kind, builtin_templates::builtin(kind), &ctx)
                .unwrap();
            assert!(residual_placeholders(&out).is_empty(), "{kind} left tokens");
            assert!(out.contains("Widget"), "{kind} missing class name");
        }
    }

    #[test]
    fn trait_test_uses_lowercase_name() {
        let out = PlaceholderRenderer::new()
            .render(
                TemplateKind::ClassTestTrait,
                builtin_templates::builtin(TemplateKind::ClassTestTrait),
                &context(),
            )
            .unwrap();
        assert!(out.contains("$widget"));
        assert!(out.contains("namespace App\\tests\\interfaces\\Sub\\Ns;"));
    }
}
