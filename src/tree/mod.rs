//! Example File Tree
//!
//! Represents the example fragment hierarchy as a map from directory
//! segments to the files each directory directly contains.

pub mod file_tree;
pub mod path;
pub mod walker;

pub use file_tree::{Directory, FileTree};
pub use walker::{Walker, WalkerConfig};
