//! CLI domain: parse, route, output, and presentation only.
//! No generation logic; the route table dispatches to the generator.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_examples_json, format_examples_text, format_summary_text, ExampleRow,
};
pub use route::RunContext;
