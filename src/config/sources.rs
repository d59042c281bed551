//! Configuration sources, applied in this order (later wins):
//! global file, docs-directory files, environment.

pub mod environment;
pub mod global_file;
pub mod workspace_file;
