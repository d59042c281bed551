//! Rendering
//!
//! Turns an example's code blocks into template variables and hands them to
//! a [`TemplateRenderer`]. The renderer is injected so the generator never
//! depends on a particular template engine; [`JinjaRenderer`] is the default.

pub mod jinja;

pub use jinja::JinjaRenderer;

use crate::error::GenerationError;
use crate::example::{CodeBlocks, Example, Framework};
use serde::Serialize;
use std::collections::BTreeMap;

/// Variable set when the example provides a `train_loop_body` block
pub const CUSTOM_TRAIN_LOOP: &str = "custom_train_loop";
/// Variable set when the example path mentions Ray Data
pub const USE_RAY_DATA: &str = "use_ray_data";
/// Trainer class name for the example's framework
pub const TRAINER_CLS: &str = "trainer_cls";

/// A single template variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateValue {
    Text(String),
    Flag(bool),
}

pub type TemplateVariables = BTreeMap<String, TemplateValue>;

/// Renders a named template against a set of variables
pub trait TemplateRenderer {
    fn render(
        &self,
        template_name: &str,
        variables: &TemplateVariables,
    ) -> Result<String, GenerationError>;
}

/// Template output for one example
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub example_path: String,
    /// Generated source file name, e.g. `tf_raydata_image.py`
    pub file_name: String,
    pub content: String,
}

/// Template variables for an example: every block by name, then the derived
/// values, which replace any block that happens to share their name.
pub fn build_variables(
    example: &Example,
    blocks: &CodeBlocks,
    framework: Framework,
) -> TemplateVariables {
    let mut variables: TemplateVariables = blocks
        .iter()
        .map(|(name, contents)| (name.to_string(), TemplateValue::Text(contents.to_string())))
        .collect();

    variables.insert(
        CUSTOM_TRAIN_LOOP.to_string(),
        TemplateValue::Flag(blocks.has_custom_train_loop()),
    );
    variables.insert(
        TRAINER_CLS.to_string(),
        TemplateValue::Text(framework.trainer_cls().to_string()),
    );
    variables.insert(
        USE_RAY_DATA.to_string(),
        TemplateValue::Flag(example.uses_ray_data()),
    );
    variables
}

/// Render one example
///
/// The framework is classified and the file name derived before anything is
/// read, so an unknown framework or a short path fails without side effects.
pub fn render_example<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    template_name: &str,
    example: &Example,
    source_extension: &str,
) -> Result<RenderedDocument, GenerationError> {
    let framework = example.framework()?;
    let file_name = example.generated_file_name(source_extension)?;
    let blocks = example.load_blocks()?;
    let variables = build_variables(example, &blocks, framework);
    let content = renderer.render(template_name, &variables)?;

    Ok(RenderedDocument {
        example_path: example.display_path(),
        file_name,
        content,
    })
}
