//! Configuration System
//!
//! Layered configuration for the generator: built-in defaults, a user-level
//! file, a file next to the docs, then environment variables. The defaults
//! reproduce the documentation layout the generator was written for, so a
//! run without any configuration needs no setup.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutogenConfig {
    /// Directory and file naming conventions
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where inputs live and how outputs are named, relative to the docs directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_includes_dir")]
    pub includes_dir: String,
    #[serde(default = "default_modules_dir")]
    pub modules_dir: String,
    /// Shared fragments, sibling of the framework directories
    #[serde(default = "default_common_dir")]
    pub common_dir: String,
    /// Top-level module directories starting with this never become examples
    #[serde(default = "default_reserved_prefix")]
    pub reserved_prefix: String,
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_template_name")]
    pub template_name: String,
    #[serde(default = "default_autogenerated_dir")]
    pub autogenerated_dir: String,
    #[serde(default = "default_requirements_dir")]
    pub requirements_dir: String,
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    #[serde(default = "default_requirements_extension")]
    pub requirements_extension: String,
    #[serde(default = "default_index_extension")]
    pub index_extension: String,
}

fn default_includes_dir() -> String {
    "includes".to_string()
}

fn default_modules_dir() -> String {
    "modules".to_string()
}

fn default_common_dir() -> String {
    "_common".to_string()
}

fn default_reserved_prefix() -> String {
    "_".to_string()
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_template_name() -> String {
    "template.txt".to_string()
}

fn default_autogenerated_dir() -> String {
    "autogenerated".to_string()
}

fn default_requirements_dir() -> String {
    "requirements".to_string()
}

fn default_source_extension() -> String {
    "py".to_string()
}

fn default_requirements_extension() -> String {
    "txt".to_string()
}

fn default_index_extension() -> String {
    "rst".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            includes_dir: default_includes_dir(),
            modules_dir: default_modules_dir(),
            common_dir: default_common_dir(),
            reserved_prefix: default_reserved_prefix(),
            templates_dir: default_templates_dir(),
            template_name: default_template_name(),
            autogenerated_dir: default_autogenerated_dir(),
            requirements_dir: default_requirements_dir(),
            source_extension: default_source_extension(),
            requirements_extension: default_requirements_extension(),
            index_extension: default_index_extension(),
        }
    }
}

impl LayoutConfig {
    pub fn includes_path(&self, docs_dir: &Path) -> PathBuf {
        docs_dir.join(&self.includes_dir)
    }

    pub fn templates_path(&self, docs_dir: &Path) -> PathBuf {
        self.includes_path(docs_dir).join(&self.templates_dir)
    }

    pub fn autogenerated_path(&self, docs_dir: &Path) -> PathBuf {
        self.includes_path(docs_dir).join(&self.autogenerated_dir)
    }

    /// The two segments that replace an example's leading segments to form
    /// its common path
    pub fn common_root(&self) -> [&str; 2] {
        [self.modules_dir.as_str(), self.common_dir.as_str()]
    }

    /// Validate layout configuration
    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("includes_dir", &self.includes_dir),
            ("modules_dir", &self.modules_dir),
            ("common_dir", &self.common_dir),
            ("reserved_prefix", &self.reserved_prefix),
            ("templates_dir", &self.templates_dir),
            ("template_name", &self.template_name),
            ("autogenerated_dir", &self.autogenerated_dir),
            ("requirements_dir", &self.requirements_dir),
            ("source_extension", &self.source_extension),
            ("requirements_extension", &self.requirements_extension),
            ("index_extension", &self.index_extension),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(format!("{} cannot be empty", name));
            }
        }

        // Otherwise the common directory would be picked up as an example
        if !self.common_dir.starts_with(&self.reserved_prefix) {
            return Err(format!(
                "common_dir '{}' must start with reserved_prefix '{}'",
                self.common_dir, self.reserved_prefix
            ));
        }

        if self.source_extension == self.index_extension {
            return Err("source_extension and index_extension must differ".to_string());
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Layout(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Layout(msg) => write!(f, "Layout: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AutogenConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.layout.validate() {
            errors.push(ValidationError::Layout(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
