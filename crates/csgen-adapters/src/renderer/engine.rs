//! Jinja template renderer.

use std::error::Error as _;

use csgen_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::MetadataContext,
    error::CsgenResult,
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::{instrument, trace};

use super::filters;

/// Renders templates with minijinja.
///
/// Output is not escaped (templates produce C#, not HTML). Any use of a name
/// the context does not define is an error, including truthiness checks in
/// `{% if %}` and `{% elif %}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JinjaRenderer;

impl JinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// A fresh environment per render, so templates never see each other.
fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_keep_trailing_newline(true);
    filters::register(&mut env);
    env
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip(self, source, context), fields(bytes = source.len()))]
    fn render(&self, name: &str, source: &str, context: &MetadataContext) -> CsgenResult<String> {
        let failed = |e: minijinja::Error| ApplicationError::RenderingFailed {
            template: name.to_string(),
            reason: describe(&e),
        };

        let mut env = environment();
        env.add_template(name, source).map_err(failed)?;
        let rendered = env
            .get_template(name)
            .and_then(|template| template.render(context))
            .map_err(failed)?;

        trace!(template = name, "Template rendered");
        Ok(rendered)
    }
}

/// Flatten the error chain into one line.
fn describe(error: &minijinja::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Triad {
        name: &'static str,
        namespace: &'static str,
        events: Vec<&'static str>,
        with_test: bool,
    }

    fn context() -> MetadataContext {
        MetadataContext::from_serialize(&Triad {
            name: "Login",
            namespace: "Puzzle",
            events: vec!["Submit", "Cancel"],
            with_test: true,
        })
        .unwrap()
    }

    #[test]
    fn renders_variables_loops_and_filters() {
        let source = "namespace {{ namespace }}\n{\n\
            {%- for e in events %}\n    // {{ e | snake_case }}\n{%- endfor %}\n\
            class {{ name }}Presenter {}\n}";
        let out = JinjaRenderer::new()
            .render("presenter.cs", source, &context())
            .unwrap();

        assert_eq!(
            out,
            "namespace Puzzle\n{\n    // submit\n    // cancel\nclass LoginPresenter {}\n}"
        );
    }

    #[test]
    fn trailing_newline_is_kept() {
        let out = JinjaRenderer::new()
            .render("model.cs", "class {{ name }} {}\n", &context())
            .unwrap();
        assert_eq!(out, "class Login {}\n");
    }

    #[test]
    fn output_is_not_html_escaped() {
        let ctx = MetadataContext::from_serialize(&serde_json::json!({ "t": "List<int> & more" }))
            .unwrap();
        let out = JinjaRenderer::new().render("x.html", "{{ t }}", &ctx).unwrap();
        assert_eq!(out, "List<int> & more");
    }

    #[test]
    fn undefined_variable_is_an_error() {
        let err = JinjaRenderer::new()
            .render("view.cs", "class {{ colour }} {}", &context())
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("view.cs"), "{message}");
        assert!(message.contains("undefined"), "{message}");
    }

    #[test]
    fn undefined_condition_is_an_error() {
        let renderer = JinjaRenderer::new();
        for source in [
            "{% if colour %}A{% else %}B{% endif %}",
            "{% if not with_test %}A{% elif colour %}B{% endif %}",
        ] {
            assert!(
                renderer.render("presenter.cs", source, &context()).is_err(),
                "{source}"
            );
        }
    }

    #[test]
    fn defined_condition_selects_branch() {
        let out = JinjaRenderer::new()
            .render(
                "class.cs",
                "{% if with_test %}A{% else %}B{% endif %}",
                &context(),
            )
            .unwrap();
        assert_eq!(out, "A");
    }

    #[test]
    fn syntax_error_is_reported() {
        let err = JinjaRenderer::new()
            .render("model.cs", "{% if %}", &context())
            .unwrap_err();
        assert!(err.to_string().contains("model.cs"));
    }

    #[test]
    fn empty_context_renders_static_text() {
        let out = JinjaRenderer::new()
            .render("static.cs", "class Fixed {}", &MetadataContext::default())
            .unwrap();
        assert_eq!(out, "class Fixed {}");
    }
}
