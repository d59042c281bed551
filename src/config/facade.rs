//! Config loader: assembles the layered sources and deserializes the result.

use super::merge;
use super::sources::{environment, global_file, workspace_file};
use super::AutogenConfig;
use config::{ConfigError, File};
use std::path::{Path, PathBuf};

/// Loads [`AutogenConfig`] from defaults, files and environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a docs directory
    ///
    /// Precedence (highest last): defaults, global file, `<docs>/autogen.toml`,
    /// `<docs>/autogen.{env}.toml`, `WIZARD_AUTOGEN__*` variables.
    pub fn load(docs_dir: &Path) -> Result<AutogenConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, docs_dir)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from an explicit file, skipping the discovered files
    ///
    /// Environment variables still apply on top.
    pub fn load_from_file(path: &Path) -> Result<AutogenConfig, ConfigError> {
        let builder = merge::builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Path of the user-level configuration file, if one can be determined
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
