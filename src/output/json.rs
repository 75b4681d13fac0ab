//! JSON output formatter

use super::{Formatter, TableRow};

/// Formatter for JSON output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn render<R: TableRow>(&self, rows: &[R], _no_header: bool) -> String {
        serde_json::to_string_pretty(rows)
            .unwrap_or_else(|e| format!("Error serializing to JSON: {}", e))
    }
}
