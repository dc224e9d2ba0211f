//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use serde::Serialize;

/// Summary of one placeholder in a dataset.
#[derive(Debug, Serialize)]
pub struct PlaceholderStats {
    /// Placeholder name.
    pub name: String,
    /// Number of candidates.
    pub candidates: usize,
    /// Candidates that contain markers of their own.
    pub nested: usize,
    /// Distinct placeholders referenced by the candidates.
    pub references: Vec<String>,
}

/// Format placeholder statistics as an ASCII table.
pub fn format_stats_table(stats: &[PlaceholderStats]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Placeholder", "Candidates", "Nested", "References"]);

    for entry in stats {
        table.add_row(vec![
            entry.name.clone(),
            entry.candidates.to_string(),
            entry.nested.to_string(),
            entry.references.join(", "),
        ]);
    }

    table
}
