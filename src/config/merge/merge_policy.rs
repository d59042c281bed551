//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with layout and logging defaults applied.
///
/// Later sources override these key by key, so a file only needs the keys
/// it changes.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("layout.includes_dir", "includes")?
        .set_default("layout.modules_dir", "modules")?
        .set_default("layout.common_dir", "_common")?
        .set_default("layout.reserved_prefix", "_")?
        .set_default("layout.templates_dir", "templates")?
        .set_default("layout.template_name", "template.txt")?
        .set_default("layout.autogenerated_dir", "autogenerated")?
        .set_default("layout.requirements_dir", "requirements")?
        .set_default("layout.source_extension", "py")?
        .set_default("layout.requirements_extension", "txt")?
        .set_default("layout.index_extension", "rst")?
        .set_default("logging.encoding", "TEXT")?
        .set_default("logging.level", "info")
}
