//! Property-based tests for file collection order

use proptest::prelude::*;
use std::path::PathBuf;
use wizard_autogen::example::collect_files_along_path;
use wizard_autogen::tree::FileTree;

const COMMON_ROOT: [&str; 2] = ["modules", "_common"];

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

proptest! {
    /// Example-path files come shortest prefix first, and every common-path
    /// file comes after every example-path file.
    #[test]
    fn collected_files_are_general_to_specific_then_common(
        tail in prop::collection::vec(segment(), 1..4),
        example_depths in prop::collection::btree_set(2usize..6, 0..4),
        common_depths in prop::collection::btree_set(2usize..6, 0..4),
    ) {
        let mut path = vec!["modules".to_string(), "tf".to_string()];
        path.extend(tail);
        let common: Vec<String> = COMMON_ROOT
            .iter()
            .map(|s| s.to_string())
            .chain(path.iter().skip(2).cloned())
            .collect();

        // Tag each file with where it was placed so order can be checked
        let mut tree = FileTree::new();
        for &depth in example_depths.iter().filter(|&&d| d <= path.len()) {
            tree.insert_file(path[..depth].to_vec(), PathBuf::from(format!("E{depth}")));
        }
        for &depth in common_depths.iter().filter(|&&d| d <= common.len()) {
            tree.insert_file(common[..depth].to_vec(), PathBuf::from(format!("C{depth}")));
        }

        let files = collect_files_along_path(&path, &tree, COMMON_ROOT);
        let tags: Vec<String> = files.iter().map(|p| p.to_string_lossy().to_string()).collect();

        let first_common = tags.iter().position(|t| t.starts_with('C')).unwrap_or(tags.len());
        prop_assert!(tags[first_common..].iter().all(|t| t.starts_with('C')));

        let example_order: Vec<usize> = tags[..first_common]
            .iter()
            .map(|t| t[1..].parse().unwrap())
            .collect();
        let mut sorted = example_order.clone();
        sorted.sort();
        prop_assert_eq!(&example_order, &sorted);

        let common_order: Vec<usize> = tags[first_common..]
            .iter()
            .map(|t| t[1..].parse().unwrap())
            .collect();
        let mut sorted = common_order.clone();
        sorted.sort();
        prop_assert_eq!(&common_order, &sorted);

        let expected_example = example_depths.iter().filter(|&&d| d <= path.len()).count();
        let expected_common = common_depths.iter().filter(|&&d| d <= common.len()).count();
        prop_assert_eq!(example_order.len(), expected_example);
        prop_assert_eq!(common_order.len(), expected_common);
    }
}
