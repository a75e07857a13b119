//! CLI command for data export
//!
//! Writes every stored expense to a file in the chosen format.

use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use crate::context::AppContext;
use crate::error::ExpenseResult;
use crate::export::{export_to_dir, export_to_file, ExportFormat};
use crate::i18n::MessageKey;

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Output file path, defaults to a dated file in the export directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `export`, returning where the file was written
pub fn handle_export_command(ctx: &AppContext, args: ExportArgs) -> ExpenseResult<PathBuf> {
    let expenses = ctx.store.get_all();

    let path = match args.output {
        Some(output) => {
            export_to_file(&expenses, args.format, &output, args.pretty)?;
            output
        }
        None => export_to_dir(
            &expenses,
            args.format,
            &ctx.paths.export_dir(),
            Local::now().date_naive(),
        )?,
    };

    tracing::info!(count = expenses.len(), format = %args.format, path = %path.display(), "exported expenses");

    println!(
        "{} {}",
        ctx.translator().t(MessageKey::DataExported),
        path.display()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::models::{Amount, Expense, ExpenseDate, ExpenseType};
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> AppContext {
        let ctx =
            AppContext::ephemeral(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()))
                .unwrap();
        ctx.store
            .save(Expense::new(
                ExpenseType::Special,
                Amount::new(5000.0).unwrap(),
                "Wedding gift",
                ExpenseDate::from_raw("2025-05-10T11:00:00"),
            ))
            .unwrap();
        ctx
    }

    #[test]
    fn test_export_to_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        let output = temp_dir.path().join("out.json");

        let path = handle_export_command(
            &ctx,
            ExportArgs {
                format: ExportFormat::Json,
                output: Some(output.clone()),
                pretty: true,
            },
        )
        .unwrap();

        assert_eq!(path, output);
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["expenses"][0]["purpose"], "Wedding gift");
    }

    #[test]
    fn test_export_defaults_to_dated_file() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        let path = handle_export_command(
            &ctx,
            ExportArgs {
                format: ExportFormat::Csv,
                output: None,
                pretty: false,
            },
        )
        .unwrap();

        assert!(path.starts_with(ctx.paths.export_dir()));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("expenses_"));
        assert!(name.ends_with(".csv"));
    }
}
