//! YAML Export functionality
//!
//! Same envelope as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Export expenses to YAML
pub fn export_expenses_yaml<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<()> {
    let export = ExpenseExport::new(expenses.to_vec());

    writeln!(writer, "# Expense Tracker Export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, ExpenseDate, ExpenseType};

    #[test]
    fn test_yaml_export() {
        let expenses = vec![Expense::new(
            ExpenseType::Special,
            Amount::new(1500.0).unwrap(),
            "Festival clothes",
            ExpenseDate::from_raw("2025-10-20"),
        )];

        let mut output = Vec::new();
        export_expenses_yaml(&expenses, &mut output).unwrap();
        let yaml_string = String::from_utf8(output).unwrap();

        assert!(yaml_string.starts_with("# Expense Tracker Export"));
        assert!(yaml_string.contains("Festival clothes"));
        assert!(yaml_string.contains("type: special"));

        let parsed: ExpenseExport = serde_yaml::from_str(&yaml_string).unwrap();
        assert_eq!(parsed.expenses, expenses);
    }
}
