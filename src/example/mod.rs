//! Examples
//!
//! An example is a leaf directory under the modules directory. Its code
//! blocks are gathered from every ancestor directory and from the parallel
//! common tree; see [`collect::collect_files_along_path`].

pub mod blocks;
pub mod collect;
pub mod framework;

pub use blocks::CodeBlocks;
pub use collect::collect_files_along_path;
pub use framework::Framework;

use crate::config::LayoutConfig;
use crate::error::GenerationError;
use crate::tree::FileTree;
use std::path::PathBuf;

/// Separator used to turn an example path into a generated file stem
pub const NAME_SEPARATOR: &str = "_";

/// Substring of an example path that selects Ray Data loading
pub const RAY_DATA_MARKER: &str = "raydata";

/// One leaf example and the files that contribute to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    /// Segments below the modules directory, e.g. `["tf", "raydata", "image"]`
    pub path: Vec<String>,
    /// Contributing files in precedence order (lowest first)
    pub files: Vec<PathBuf>,
}

impl Example {
    /// Slash-joined example path, e.g. `tf/raydata/image`
    pub fn display_path(&self) -> String {
        self.path.join("/")
    }

    pub fn framework(&self) -> Result<Framework, GenerationError> {
        Framework::classify(&self.path)
    }

    /// Whether the example loads data through Ray Data
    pub fn uses_ray_data(&self) -> bool {
        self.display_path().contains(RAY_DATA_MARKER)
    }

    /// File stem of the generated source, e.g. `tf_raydata_image`
    ///
    /// A single-segment path has no separator to substitute and is rejected.
    pub fn generated_stem(&self) -> Result<String, GenerationError> {
        if self.path.len() < 2 {
            return Err(GenerationError::MalformedName {
                name: self.display_path(),
                parts: self.path.len(),
            });
        }
        Ok(self.path.join(NAME_SEPARATOR))
    }

    /// Generated source file name, e.g. `tf_raydata_image.py`
    pub fn generated_file_name(&self, extension: &str) -> Result<String, GenerationError> {
        Ok(format!("{}.{}", self.generated_stem()?, extension))
    }

    pub fn load_blocks(&self) -> Result<CodeBlocks, GenerationError> {
        Ok(CodeBlocks::load(&self.files)?)
    }
}

/// Find every example in the tree, in path order
///
/// Leaf directories whose first segment below the modules directory starts
/// with the reserved prefix (the common tree, for instance) are skipped, as
/// is the modules directory itself.
pub fn discover_examples(tree: &FileTree, layout: &LayoutConfig) -> Vec<Example> {
    let mut examples = Vec::new();
    for key in tree.leaves() {
        let Some((first, rest)) = key.split_first() else {
            continue;
        };
        if first != &layout.modules_dir || rest.is_empty() {
            continue;
        }
        if rest[0].starts_with(&layout.reserved_prefix) {
            continue;
        }
        examples.push(Example {
            path: rest.to_vec(),
            files: collect_files_along_path(key, tree, layout.common_root()),
        });
    }
    examples
}
