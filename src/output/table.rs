//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::{Formatter, TableRow};

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn render<R: TableRow>(&self, rows: &[R], no_header: bool) -> String {
        let mut table = Table::new();
        table.load_preset(NOTHING);
        if !no_header {
            table.set_header(R::headers());
        }

        for row in rows {
            table.add_row(row.cells());
        }

        let mut out = format!("{table}");
        if !no_header {
            out.push_str(&format!("\n\nTotal: {} {}", rows.len(), R::KIND));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::NameRow;

    #[test]
    fn test_table_formatter_empty() {
        let out = TableFormatter.render::<NameRow>(&[], false);
        assert!(out.contains("Total: 0 names"));
    }

    #[test]
    fn test_table_formatter_with_data() {
        let rows = vec![NameRow::new("alpha"), NameRow::new("beta")];
        let out = TableFormatter.render(&rows, false);
        assert!(out.contains("Name"));
        assert!(out.contains("alpha"));
        assert!(out.contains("Total: 2 names"));
    }

    #[test]
    fn test_table_formatter_no_header() {
        let rows = vec![NameRow::new("alpha")];
        let out = TableFormatter.render(&rows, true);
        assert!(!out.contains("Name"));
        assert!(!out.contains("Total"));
        assert!(out.contains("alpha"));
    }
}
