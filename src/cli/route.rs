//! CLI route: single route table and run context. Dispatches to the generator and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_examples_json, format_examples_text, format_summary_text, ExampleRow,
};
use crate::config::{AutogenConfig, ConfigLoader};
use crate::error::GenerationError;
use crate::generate::Generator;
use crate::render::JinjaRenderer;
use crate::tree::path::canonicalize_path;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: docs directory and effective configuration.
pub struct RunContext {
    docs_dir: PathBuf,
    config: AutogenConfig,
}

impl RunContext {
    /// Create run context from the docs directory and optional config path.
    pub fn new(docs_dir: PathBuf, config_path: Option<PathBuf>) -> Result<Self, GenerationError> {
        let docs_dir = canonicalize_path(&docs_dir)?;
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&docs_dir)?,
        };

        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            GenerationError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;

        Ok(Self { docs_dir, config })
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn config(&self) -> &AutogenConfig {
        &self.config
    }

    /// Execute a command; no command means `generate`.
    pub fn execute(&self, command: Option<&Commands>) -> Result<String, GenerationError> {
        match command.unwrap_or(&Commands::Generate) {
            Commands::Generate => self.handle_generate(),
            Commands::List { format } => self.handle_list(format),
            Commands::Config => self.handle_config(),
        }
    }

    fn generator(&self) -> Generator<JinjaRenderer> {
        Generator::with_default_renderer(self.docs_dir.clone(), self.config.layout.clone())
    }

    fn handle_generate(&self) -> Result<String, GenerationError> {
        let summary = self.generator().run()?;
        Ok(format_summary_text(&summary))
    }

    fn handle_list(&self, format: &str) -> Result<String, GenerationError> {
        let layout = &self.config.layout;
        let examples = self.generator().discover()?;
        info!(examples = examples.len(), "Listing examples");

        let mut rows = Vec::with_capacity(examples.len());
        for example in &examples {
            let framework = example.framework().ok();
            let blocks = example.load_blocks()?;
            rows.push(ExampleRow {
                path: example.display_path(),
                framework: framework.map(|f| f.as_str().to_string()),
                trainer_cls: framework.map(|f| f.trainer_cls().to_string()),
                generated_file: example.generated_file_name(&layout.source_extension).ok(),
                blocks: blocks.names().map(str::to_string).collect(),
            });
        }

        match format {
            "json" => Ok(format_examples_json(&rows)),
            "text" => Ok(format_examples_text(&rows)),
            other => Err(GenerationError::ConfigError(format!(
                "Invalid list format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }

    fn handle_config(&self) -> Result<String, GenerationError> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| GenerationError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
