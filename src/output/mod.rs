//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON

pub mod common;
mod csv;
mod json;
mod organizations;
mod platform;
mod services;
mod spaces;
mod table;
mod users;

use serde::Serialize;

use crate::cli::OutputFormat;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;
pub use organizations::{OrgRow, PermissionRow};
pub use platform::{BuildpackRow, QuotaRow};
pub use services::{ServiceInstanceRow, ServiceKeyRow, ServiceRow};
pub use spaces::SpaceRow;
pub use users::{RoleRow, UserRow};

/// A flattened record that can be printed in every output format
pub trait TableRow: Serialize {
    /// Plural noun used in the table footer
    const KIND: &'static str;

    /// Column headers for table output (CSV derives its header from these)
    fn headers() -> Vec<&'static str>;

    /// Cell values, in header order
    fn cells(&self) -> Vec<String>;
}

/// Trait for output formatters
pub trait Formatter {
    /// Render rows into the text to print
    fn render<R: TableRow>(&self, rows: &[R], no_header: bool) -> String;
}

/// Render rows in the requested format
pub fn render_rows<R: TableRow>(rows: &[R], format: OutputFormat, no_header: bool) -> String {
    match format {
        OutputFormat::Table => TableFormatter.render(rows, no_header),
        OutputFormat::Csv => CsvFormatter.render(rows, no_header),
        OutputFormat::Json => JsonFormatter.render(rows, no_header),
    }
}

/// Print rows in the requested format
pub fn print_rows<R: TableRow>(rows: &[R], format: OutputFormat, no_header: bool) {
    let out = render_rows(rows, format, no_header);
    if !out.is_empty() {
        println!("{}", out);
    }
}
