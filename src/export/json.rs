//! JSON Export functionality
//!
//! Exports the expense collection wrapped in an envelope that records when
//! and by which version it was produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Amount, Expense, ExpenseType};

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in stored order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    pub daily_count: usize,
    pub credit_count: usize,
    pub special_count: usize,

    /// Sum of every amount, all months
    pub total_amount: Amount,

    /// Earliest readable expense date
    pub earliest_expense: Option<String>,

    /// Latest readable expense date
    pub latest_expense: Option<String>,
}

impl ExpenseExport {
    /// Build an export of `expenses`
    pub fn new(expenses: Vec<Expense>) -> Self {
        let count_of = |t: ExpenseType| expenses.iter().filter(|e| e.expense_type == t).count();

        let dates: Vec<_> = expenses.iter().filter_map(|e| e.occurred_at()).collect();

        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            daily_count: count_of(ExpenseType::Daily),
            credit_count: count_of(ExpenseType::Credit),
            special_count: count_of(ExpenseType::Special),
            total_amount: expenses.iter().map(|e| e.amount).sum(),
            earliest_expense: dates.iter().min().map(|d| d.to_string()),
            latest_expense: dates.iter().max().map(|d| d.to_string()),
        };

        Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }
}

/// Export expenses to JSON
pub fn export_expenses_json<W: Write>(
    expenses: &[Expense],
    writer: W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ExpenseExport::new(expenses.to_vec());

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}
