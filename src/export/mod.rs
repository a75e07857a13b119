//! Export module for the expense tracker
//!
//! Pure formatting of the expense collection, plus a helper that saves the
//! result as a dated file:
//! - CSV: flat, spreadsheet-compatible rows (the canonical export)
//! - JSON: machine-readable envelope with metadata
//! - YAML: the same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, CSV_HEADER};
pub use self::json::{export_expenses_json, ExpenseExport, ExportMetadata};
pub use self::yaml::export_expenses_yaml;

use chrono::NaiveDate;
use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ExpenseResult;
use crate::models::Expense;
use crate::storage::write_atomic;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    #[default]
    Csv,
    /// JSON format (expenses plus metadata)
    Json,
    /// YAML format (expenses plus metadata, human-readable)
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Write `expenses` in `format`
pub fn export_expenses<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    writer: W,
    pretty: bool,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, writer),
        ExportFormat::Json => export_expenses_json(expenses, writer, pretty),
        ExportFormat::Yaml => export_expenses_yaml(expenses, writer),
    }
}

/// Dated file name for an export, e.g. `expenses_2025-06-01.csv`
pub fn default_export_file_name(format: ExportFormat, today: NaiveDate) -> String {
    format!("expenses_{}.{}", today.format("%Y-%m-%d"), format.extension())
}

/// Write an export to `path`, replacing any existing file atomically
pub fn export_to_file(
    expenses: &[Expense],
    format: ExportFormat,
    path: &Path,
    pretty: bool,
) -> ExpenseResult<()> {
    let mut buffer = Vec::new();
    export_expenses(expenses, format, &mut buffer, pretty)?;
    write_atomic(path, &buffer)
}

/// Save an export under its dated name inside `dir` and return the path
pub fn export_to_dir(
    expenses: &[Expense],
    format: ExportFormat,
    dir: &Path,
    today: NaiveDate,
) -> ExpenseResult<PathBuf> {
    let path = dir.join(default_export_file_name(format, today));
    export_to_file(expenses, format, &path, true)?;
    Ok(path)
}
