//! Wizard Autogen: Training Example Generation
//!
//! Walks a tree of example code fragments, assembles the fragments that apply
//! to each leaf example, renders them through a Jinja template into a
//! standalone source file, and writes a reStructuredText index page for each
//! generated source.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod example;
pub mod generate;
pub mod index;
pub mod logging;
pub mod render;
pub mod tree;

pub use error::{GenerationError, StorageError};
pub use generate::{GenerationSummary, Generator};
