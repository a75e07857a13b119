//! CSV Export functionality
//!
//! Flat, spreadsheet-compatible export of the expense collection, one row per
//! expense.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Column headers of the expense CSV
pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Date",
    "Type",
    "Purpose",
    "Notes",
    "Amount",
    "Payment Method",
    "Reminder",
];

/// Export expenses to CSV, in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        let amount = format!("{:.2}", expense.amount.value());
        csv_writer
            .write_record([
                expense.id.as_str(),
                expense.date.as_str(),
                expense.expense_type.as_str(),
                expense.purpose.as_str(),
                expense.notes.as_deref().unwrap_or(""),
                amount.as_str(),
                expense.payment_method.as_str(),
                if expense.reminder_enabled { "true" } else { "false" },
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
