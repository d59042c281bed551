//! Filesystem walker that builds the example file tree

use crate::error::StorageError;
use crate::tree::file_tree::FileTree;
use crate::tree::path;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};
use walkdir::WalkDir;

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Maximum depth to traverse below the start directory (None = unlimited)
    pub max_depth: Option<usize>,
}

/// Walks `<base>/<start>` and keys every directory by its segments relative
/// to `base`, so the first segment of every key is `start`.
pub struct Walker {
    base: PathBuf,
    start: String,
    config: WalkerConfig,
}

impl Walker {
    pub fn new(base: PathBuf, start: impl Into<String>) -> Self {
        Self {
            base,
            start: start.into(),
            config: WalkerConfig::default(),
        }
    }

    pub fn with_config(base: PathBuf, start: impl Into<String>, config: WalkerConfig) -> Self {
        Self {
            base,
            start: start.into(),
            config,
        }
    }

    /// Walk the filesystem and build the file tree
    ///
    /// Entries are visited in file-name order so the tree, and everything
    /// derived from it, is the same on every platform.
    #[instrument(skip(self), fields(base = %self.base.display(), start = %self.start))]
    pub fn walk(&self) -> Result<FileTree, StorageError> {
        let root = self.base.join(&self.start);
        let mut tree = FileTree::new();

        let walker = WalkDir::new(&root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX))
            .sort_by_file_name();

        let mut file_count = 0usize;
        for entry in walker {
            let entry = entry.map_err(|e| StorageError::Walk(e.to_string()))?;
            let file_type = entry.file_type();

            if file_type.is_dir() {
                let key = path::relative_segments(entry.path(), &self.base)?;
                tree.insert_directory(key);
            } else if file_type.is_file() {
                tree.insert_file(self.parent_key(entry.path())?, entry.path().to_path_buf());
                file_count += 1;
            } else if file_type.is_symlink() {
                // Unfollowed link: a file target is a fragment, a directory
                // target makes its parent a branch but is not entered
                match fs::metadata(entry.path()) {
                    Ok(target) if target.is_file() => {
                        tree.insert_file(self.parent_key(entry.path())?, entry.path().to_path_buf());
                        file_count += 1;
                    }
                    Ok(target) if target.is_dir() => {
                        tree.mark_branch(&self.parent_key(entry.path())?);
                    }
                    Ok(_) => {}
                    Err(e) => {
                        debug!(path = %entry.path().display(), error = %e, "Skipping broken symlink");
                    }
                }
            }
        }

        debug!(
            directories = tree.len(),
            files = file_count,
            "Walked example tree"
        );
        Ok(tree)
    }

    fn parent_key(&self, entry_path: &Path) -> Result<Vec<String>, StorageError> {
        let parent = entry_path.parent().ok_or_else(|| {
            StorageError::InvalidPath(format!(
                "File without parent directory: {}",
                entry_path.display()
            ))
        })?;
        path::relative_segments(parent, &self.base)
    }
}
