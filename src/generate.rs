//! Generation run: walk, render every example, then write the index pages.

use crate::config::LayoutConfig;
use crate::error::{GenerationError, StorageError};
use crate::example::{discover_examples, Example};
use crate::index::IndexDocument;
use crate::render::{render_example, JinjaRenderer, RenderedDocument, TemplateRenderer};
use crate::tree::{FileTree, Walker};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Files written by one run, in the order they were written
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationSummary {
    pub generated: Vec<PathBuf>,
    pub index_documents: Vec<PathBuf>,
}

/// Generates example sources and their index pages for one docs directory
///
/// Any error aborts the run; files already written stay on disk.
pub struct Generator<R: TemplateRenderer> {
    docs_dir: PathBuf,
    layout: LayoutConfig,
    renderer: R,
}

impl Generator<JinjaRenderer> {
    /// Generator that loads templates from the layout's templates directory
    pub fn with_default_renderer(docs_dir: PathBuf, layout: LayoutConfig) -> Self {
        let renderer = JinjaRenderer::from_dir(&layout.templates_path(&docs_dir));
        Self::new(docs_dir, layout, renderer)
    }
}

impl<R: TemplateRenderer> Generator<R> {
    pub fn new(docs_dir: PathBuf, layout: LayoutConfig, renderer: R) -> Self {
        Self {
            docs_dir,
            layout,
            renderer,
        }
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Walk `<includes>/<modules>` into a file tree
    pub fn build_file_tree(&self) -> Result<FileTree, StorageError> {
        Walker::new(
            self.layout.includes_path(&self.docs_dir),
            self.layout.modules_dir.clone(),
        )
        .walk()
    }

    /// All examples under the modules directory
    pub fn discover(&self) -> Result<Vec<Example>, GenerationError> {
        let tree = self.build_file_tree()?;
        Ok(discover_examples(&tree, &self.layout))
    }

    pub fn render(&self, example: &Example) -> Result<RenderedDocument, GenerationError> {
        render_example(
            &self.renderer,
            &self.layout.template_name,
            example,
            &self.layout.source_extension,
        )
    }

    /// Write a rendered example into the autogenerated directory
    pub fn write_example(&self, document: &RenderedDocument) -> Result<PathBuf, GenerationError> {
        let dir = self.layout.autogenerated_path(&self.docs_dir);
        fs::create_dir_all(&dir)?;
        let path = dir.join(&document.file_name);
        fs::write(&path, &document.content)?;
        debug!(example = %document.example_path, path = %path.display(), "Wrote example");
        Ok(path)
    }

    /// Write the index page for a generated source into the docs directory
    pub fn write_index(&self, generated: &Path) -> Result<PathBuf, GenerationError> {
        let document = IndexDocument::for_generated(generated, &self.docs_dir, &self.layout)?;
        let file_name = document.file_name(&self.layout).ok_or_else(|| {
            StorageError::InvalidPath(format!("No file name in {}", generated.display()))
        })?;
        let path = self.docs_dir.join(file_name);
        fs::write(&path, document.render())?;
        debug!(path = %path.display(), "Wrote index document");
        Ok(path)
    }

    /// Run the whole generation
    ///
    /// Every example is rendered and written before any index page, so an
    /// index page only ever refers to a source produced by this run.
    #[instrument(skip(self), fields(docs = %self.docs_dir.display()))]
    pub fn run(&self) -> Result<GenerationSummary, GenerationError> {
        let start = Instant::now();
        info!("Starting generation");

        let examples = self.discover()?;
        info!(examples = examples.len(), "Discovered examples");

        let mut summary = GenerationSummary::default();
        for example in &examples {
            let document = self.render(example)?;
            summary.generated.push(self.write_example(&document)?);
        }

        for generated in &summary.generated {
            let index = self.write_index(generated)?;
            summary.index_documents.push(index);
        }

        info!(
            generated = summary.generated.len(),
            index_documents = summary.index_documents.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Generation complete"
        );
        Ok(summary)
    }
}
