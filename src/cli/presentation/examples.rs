//! Example listing presentation: table and json.

use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use serde_json::json;

/// One discovered example as shown by `list`
#[derive(Debug, Clone, Serialize)]
pub struct ExampleRow {
    pub path: String,
    /// None when the first segment is not a known framework
    pub framework: Option<String>,
    pub trainer_cls: Option<String>,
    pub generated_file: Option<String>,
    pub blocks: Vec<String>,
}

pub fn format_examples_text(rows: &[ExampleRow]) -> String {
    if rows.is_empty() {
        return "No examples found.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Example", "Trainer", "Generated file", "Blocks"]);
    for row in rows {
        table.add_row(vec![
            row.path.clone(),
            row.trainer_cls.clone().unwrap_or_else(|| "(unknown)".to_string()),
            row.generated_file.clone().unwrap_or_else(|| "-".to_string()),
            row.blocks.join(", "),
        ]);
    }
    format!("{}\n\nTotal: {} example(s)", table, rows.len())
}

pub fn format_examples_json(rows: &[ExampleRow]) -> String {
    let out = json!({ "examples": rows, "total": rows.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
