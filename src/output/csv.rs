//! CSV output formatter

use super::common::escape_csv;
use super::{Formatter, TableRow};

/// Formatter for CSV output
pub struct CsvFormatter;

/// CSV header name for a table header (`"Created At"` -> `created_at`)
fn csv_header(header: &str) -> String {
    header.to_lowercase().replace(' ', "_")
}

impl Formatter for CsvFormatter {
    fn render<R: TableRow>(&self, rows: &[R], no_header: bool) -> String {
        let mut lines = Vec::with_capacity(rows.len() + 1);
        if !no_header {
            let headers: Vec<String> = R::headers().iter().map(|h| csv_header(h)).collect();
            lines.push(headers.join(","));
        }
        for row in rows {
            let cells: Vec<String> = row.cells().iter().map(|c| escape_csv(c)).collect();
            lines.push(cells.join(","));
        }
        lines.join("\n")
    }
}
