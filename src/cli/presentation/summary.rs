//! Generation summary presentation.

use crate::generate::GenerationSummary;

pub fn format_summary_text(summary: &GenerationSummary) -> String {
    let mut out = format!(
        "Generated {} example(s), {} index document(s)",
        summary.generated.len(),
        summary.index_documents.len()
    );
    for (source, index) in summary.generated.iter().zip(&summary.index_documents) {
        out.push_str(&format!("\n  {} -> {}", source.display(), index.display()));
    }
    out
}
