//! Code block mapping: block name -> file contents

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Block that switches the template to a custom training loop
pub const TRAIN_LOOP_BODY: &str = "train_loop_body";

/// Named code blocks for one example
///
/// Inserting a name that already exists replaces its content, so callers
/// must insert in precedence order (lowest first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlocks {
    blocks: BTreeMap<String, String>,
}

impl CodeBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every file in order and key its contents by block name
    pub fn load(files: &[PathBuf]) -> Result<Self, StorageError> {
        let mut blocks = Self::new();
        for file in files {
            let name = block_name(file).ok_or_else(|| {
                StorageError::InvalidPath(format!(
                    "No UTF-8 block name for {}",
                    file.display()
                ))
            })?;
            let contents = fs::read_to_string(file)?;
            if blocks.insert(name.clone(), contents).is_some() {
                debug!(block = %name, source = %file.display(), "Block overridden");
            }
        }
        Ok(blocks)
    }

    /// Insert a block, returning the content it replaced
    pub fn insert(&mut self, name: String, contents: String) -> Option<String> {
        self.blocks.insert(name, contents)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.blocks.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn has_custom_train_loop(&self) -> bool {
        self.contains(TRAIN_LOOP_BODY)
    }
}

/// Block name of a file: its file name without the extension
///
/// None when there is no file name or it is not valid UTF-8.
pub fn block_name(file: &Path) -> Option<String> {
    file.file_stem()?.to_str().map(str::to_string)
}
