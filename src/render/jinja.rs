//! `minijinja` implementation of [`TemplateRenderer`]

use super::{TemplateRenderer, TemplateVariables};
use crate::error::GenerationError;
use minijinja::{path_loader, Environment};
use std::path::Path;

/// Renders Jinja templates loaded from a directory (or registered in memory)
///
/// Undefined variables render as empty strings and a single trailing newline
/// is dropped from the template, matching Jinja2's defaults.
pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    /// Load templates lazily from `dir`
    pub fn from_dir(dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(dir));
        Self { env }
    }

    /// Renderer with a single in-memory template
    pub fn from_source(name: &str, source: &str) -> Result<Self, GenerationError> {
        let mut env = Environment::new();
        env.add_template_owned(name.to_string(), source.to_string())?;
        Ok(Self { env })
    }
}

impl TemplateRenderer for JinjaRenderer {
    fn render(
        &self,
        template_name: &str,
        variables: &TemplateVariables,
    ) -> Result<String, GenerationError> {
        let template = self.env.get_template(template_name)?;
        Ok(template.render(variables)?)
    }
}
