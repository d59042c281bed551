//! In-memory map of directory segments to the files they directly contain

use std::collections::BTreeMap;
use std::path::PathBuf;

/// One directory as seen by the walker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    /// Files directly inside the directory, in file-name order
    pub files: Vec<PathBuf>,
    /// True when the directory has no subdirectories
    pub is_leaf: bool,
}

/// Directory segments (relative to the walk base) mapped to their contents
///
/// Keys are ordered, so iteration visits parents before children and
/// siblings in name order.
#[derive(Debug, Clone, Default)]
pub struct FileTree {
    directories: BTreeMap<Vec<String>, Directory>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory. Its parent, if already known, stops being a leaf.
    pub fn insert_directory(&mut self, key: Vec<String>) {
        if key.len() > 1 {
            if let Some(parent) = self.directories.get_mut(&key[..key.len() - 1]) {
                parent.is_leaf = false;
            }
        }
        self.directories.entry(key).or_insert(Directory {
            files: Vec::new(),
            is_leaf: true,
        });
    }

    /// Mark a known directory as having subdirectories the walk does not enter
    pub fn mark_branch(&mut self, key: &[String]) {
        if let Some(dir) = self.directories.get_mut(key) {
            dir.is_leaf = false;
        }
    }

    /// Record a file under its directory, registering the directory if needed
    pub fn insert_file(&mut self, dir_key: Vec<String>, file: PathBuf) {
        if !self.directories.contains_key(&dir_key) {
            self.insert_directory(dir_key.clone());
        }
        if let Some(dir) = self.directories.get_mut(&dir_key) {
            dir.files.push(file);
        }
    }

    /// Files registered under exactly `key`; empty when the key is unknown
    pub fn files(&self, key: &[String]) -> &[PathBuf] {
        self.directories
            .get(key)
            .map(|d| d.files.as_slice())
            .unwrap_or(&[])
    }

    pub fn directory(&self, key: &[String]) -> Option<&Directory> {
        self.directories.get(key)
    }

    /// Keys of all leaf directories, in key order
    pub fn leaves(&self) -> impl Iterator<Item = &[String]> {
        self.directories
            .iter()
            .filter(|(_, dir)| dir.is_leaf)
            .map(|(key, _)| key.as_slice())
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}
