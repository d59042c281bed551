//! Shared test utilities for integration tests
//!
//! Builds a throwaway docs directory with the standard includes layout.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wizard_autogen::config::LayoutConfig;
use wizard_autogen::render::JinjaRenderer;
use wizard_autogen::Generator;

/// A template exercising every derived variable
pub const TEMPLATE: &str = "\
# trainer: {{ trainer_cls }}
{% if use_ray_data %}import ray.data
{% endif %}{{ imports }}
{% if custom_train_loop %}def train_loop_per_worker(config):
{{ train_loop_body }}
{% else %}# default training loop
{% endif %}";

/// Temporary docs directory: `<docs>/includes/{modules,templates}`
pub struct DocsFixture {
    dir: TempDir,
}

impl DocsFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("includes/modules")).unwrap();
        fs::create_dir_all(dir.path().join("includes/templates")).unwrap();
        let fixture = Self { dir };
        fixture.write_template(TEMPLATE);
        fixture
    }

    pub fn docs(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn write_template(&self, contents: &str) {
        fs::write(
            self.dir.path().join("includes/templates/template.txt"),
            contents,
        )
        .unwrap();
    }

    /// Write a fragment at `rel` below the modules directory
    pub fn write_fragment(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join("includes/modules").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    /// Create an (empty) directory below the modules directory
    pub fn mkdir(&self, rel: &str) {
        fs::create_dir_all(self.dir.path().join("includes/modules").join(rel)).unwrap();
    }

    pub fn generator(&self) -> Generator<JinjaRenderer> {
        Generator::with_default_renderer(self.docs(), LayoutConfig::default())
    }

    pub fn autogenerated(&self, name: &str) -> PathBuf {
        self.dir.path().join("includes/autogenerated").join(name)
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}
