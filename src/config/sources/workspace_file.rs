//! Docs-directory config file source: autogen.toml and autogen.{env}.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "autogen.toml";

/// Name of the active environment (`WIZARD_AUTOGEN_ENV`, default "development")
pub fn env_name() -> String {
    std::env::var("WIZARD_AUTOGEN_ENV").unwrap_or_else(|_| "development".to_string())
}

pub fn base_config_path(docs_dir: &Path) -> PathBuf {
    docs_dir.join(CONFIG_FILE_NAME)
}

pub fn env_config_path(docs_dir: &Path, env: &str) -> PathBuf {
    docs_dir.join(format!("autogen.{}.toml", env))
}

/// Add docs-directory config files to builder.
/// Precedence: autogen.toml (base) then autogen.{WIZARD_AUTOGEN_ENV}.toml.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    docs_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base = base_config_path(docs_dir);
    if base.exists() {
        builder = builder.add_source(File::from(base.as_path()).required(false));
    }

    let env_specific = env_config_path(docs_dir, &env_name());
    if env_specific.exists() {
        builder = builder.add_source(File::from(env_specific.as_path()).required(false));
    }

    Ok(builder)
}
