//! CLI presentation: text and json formatters per command.

mod examples;
mod summary;

pub use examples::{format_examples_json, format_examples_text, ExampleRow};
pub use summary::format_summary_text;
