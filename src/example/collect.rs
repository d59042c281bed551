//! File collection along an example path and its shared "common" path

use crate::tree::FileTree;
use std::path::PathBuf;

/// Collect the files that contribute to the directory at `path`
///
/// `path` is keyed the same way as the tree (first segment is the modules
/// directory). Files come from every prefix of `path`, shortest first, and
/// then from every prefix of the common path, which is `path` with its first
/// two segments replaced by `common_root`. Common files therefore always come
/// after, and override, example-specific files with the same block name.
pub fn collect_files_along_path<S: AsRef<str>>(
    path: &[S],
    tree: &FileTree,
    common_root: [&str; 2],
) -> Vec<PathBuf> {
    let example: Vec<String> = path.iter().map(|s| s.as_ref().to_string()).collect();
    let common = common_path(&example, common_root);

    let mut files = Vec::new();
    accumulate_prefixes(&example, tree, &mut files);
    accumulate_prefixes(&common, tree, &mut files);
    files
}

/// `path` with its first two segments replaced by `common_root`
pub fn common_path(path: &[String], common_root: [&str; 2]) -> Vec<String> {
    common_root
        .iter()
        .map(|s| s.to_string())
        .chain(path.iter().skip(2).cloned())
        .collect()
}

fn accumulate_prefixes(path: &[String], tree: &FileTree, files: &mut Vec<PathBuf>) {
    for len in 1..=path.len() {
        files.extend(tree.files(&path[..len]).iter().cloned());
    }
}
