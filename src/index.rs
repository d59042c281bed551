//! Index documents
//!
//! Every generated source gets a small reStructuredText page that titles it
//! and pulls in the source and its requirements file with `literalinclude`.

use crate::config::LayoutConfig;
use crate::error::{GenerationError, StorageError};
use crate::example::NAME_SEPARATOR;
use std::path::{Path, PathBuf};

/// The three parts encoded in a generated file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedName {
    pub framework: String,
    pub dataloading: String,
    pub task: String,
}

impl GeneratedName {
    /// Split a file stem such as `tf_raydata_image`
    pub fn parse(stem: &str) -> Result<Self, GenerationError> {
        let parts: Vec<&str> = stem.split(NAME_SEPARATOR).collect();
        match parts.as_slice() {
            [framework, dataloading, task] => Ok(Self {
                framework: framework.to_string(),
                dataloading: dataloading.to_string(),
                task: task.to_string(),
            }),
            _ => Err(GenerationError::MalformedName {
                name: stem.to_string(),
                parts: parts.len(),
            }),
        }
    }

    pub fn title(&self) -> String {
        format!(
            "Distributed Training with {} on {} Data using {} for Data Loading",
            self.framework, self.task, self.dataloading
        )
    }
}

/// Contents of one index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    pub title: String,
    /// Generated source, relative to the docs directory
    pub source_path: PathBuf,
    /// Requirements file, relative to the docs directory
    pub requirements_path: PathBuf,
}

impl IndexDocument {
    /// Describe the index page for `generated`, which must live under `docs_dir`
    pub fn for_generated(
        generated: &Path,
        docs_dir: &Path,
        layout: &LayoutConfig,
    ) -> Result<Self, GenerationError> {
        let stem = generated
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .ok_or_else(|| {
                StorageError::InvalidPath(format!("No file name in {}", generated.display()))
            })?;
        let name = GeneratedName::parse(&stem)?;

        let source_path = generated
            .strip_prefix(docs_dir)
            .map_err(|_| {
                StorageError::InvalidPath(format!(
                    "{} is not under {}",
                    generated.display(),
                    docs_dir.display()
                ))
            })?
            .to_path_buf();

        let requirements_path = requirements_path_for(&source_path, layout)?;

        Ok(Self {
            title: name.title(),
            source_path,
            requirements_path,
        })
    }

    /// Heading underline, one `-` per title character
    pub fn underline(&self) -> String {
        "-".repeat(self.title.chars().count())
    }

    /// File name of the page itself, e.g. `tf_raydata_image.rst`
    pub fn file_name(&self, layout: &LayoutConfig) -> Option<PathBuf> {
        self.source_path
            .file_name()
            .map(|name| Path::new(name).with_extension(&layout.index_extension))
    }

    pub fn render(&self) -> String {
        format!(
            "\n:orphan:\n\n{title}\n{underline}\n\n.. literalinclude:: {requirements}\n\n.. literalinclude:: {source}\n\n",
            title = self.title,
            underline = self.underline(),
            requirements = self.requirements_path.display(),
            source = self.source_path.display(),
        )
    }
}

/// `<parent of parent>/<requirements_dir>/<name with requirements extension>`
fn requirements_path_for(
    source_path: &Path,
    layout: &LayoutConfig,
) -> Result<PathBuf, GenerationError> {
    let file_name = source_path.file_name().ok_or_else(|| {
        StorageError::InvalidPath(format!("No file name in {}", source_path.display()))
    })?;
    let grandparent = source_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new(""));
    Ok(grandparent
        .join(&layout.requirements_dir)
        .join(Path::new(file_name).with_extension(&layout.requirements_extension)))
}
