// ABOUTME: Page template engine implementation using Handlebars
// ABOUTME: Compiles page templates and streams rendered output into writers

use handlebars::{Handlebars, Template};
use std::io::Write;
use std::sync::Arc;

use super::context::PageContext;
use super::error::{Result, TemplateError};
use super::helpers::{self, PageHelpers, StandardHelpers};

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the standard page helpers
    pub fn new() -> Self {
        Self::with_helpers(Arc::new(StandardHelpers))
    }

    /// Create a template engine whose templates call into `page_helpers`
    pub fn with_helpers(page_helpers: Arc<dyn PageHelpers>) -> Self {
        let mut handlebars = Handlebars::new();

        // Missing variables render as empty, templates are never cached between runs
        handlebars.set_strict_mode(false);
        handlebars.set_dev_mode(false);

        helpers::register_helpers(&mut handlebars, page_helpers);

        Self { handlebars }
    }

    /// Parse template source into a compiled template
    pub fn compile(&self, source: &str) -> Result<Template> {
        Template::compile(source).map_err(TemplateError::SyntaxError)
    }

    /// Execute a compiled template against `context`, streaming into `writer`.
    ///
    /// The template is registered under `name` only for the duration of the call.
    pub fn render_to_write<W: Write>(
        &mut self,
        name: &str,
        template: Template,
        context: &PageContext,
        writer: W,
    ) -> Result<()> {
        self.handlebars.register_template(name, template);
        let rendered = self.handlebars.render_to_write(name, context, writer);
        self.handlebars.unregister_template(name);

        rendered.map_err(TemplateError::RenderError)
    }

    /// Compile and render template source into a string
    pub fn render(&mut self, name: &str, source: &str, context: &PageContext) -> Result<String> {
        let template = self.compile(source)?;
        let mut buffer = Vec::new();
        self.render_to_write(name, template, context, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| TemplateError::SystemError(e.to_string()))
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, source: &str) -> Result<()> {
        self.compile(source).map(|_| ())
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
