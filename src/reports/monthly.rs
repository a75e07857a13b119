//! Monthly Summary
//!
//! Per-category totals for one calendar month, derived from the full expense
//! collection without modifying it.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::i18n::{MessageKey, Translator};
use crate::models::{Amount, Expense, ExpenseType};
use crate::storage::{ExpenseStore, KeyValueStore};

/// Share of the month's total per category, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShares {
    pub daily: f64,
    pub credit: f64,
    pub special: f64,
}

/// Sums per expense type for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Year of the summarized month
    pub year: i32,
    /// Month (1-12)
    pub month: u32,
    /// Total of daily expenses
    pub daily: Amount,
    /// Total of credit expenses
    pub credit: Amount,
    /// Total of special expenses
    pub special: Amount,
    /// Number of expenses per type, in `ExpenseType::ALL` order
    counts: [usize; 3],
}

impl MonthlySummary {
    /// Summarize the expenses falling in `year`/`month`
    ///
    /// Expenses with unreadable dates are left out.
    pub fn summarize(expenses: &[Expense], year: i32, month: u32) -> Self {
        let mut summary = Self {
            year,
            month,
            daily: Amount::zero(),
            credit: Amount::zero(),
            special: Amount::zero(),
            counts: [0; 3],
        };

        for expense in expenses.iter().filter(|e| e.is_in_month(year, month)) {
            match expense.expense_type {
                ExpenseType::Daily => summary.daily += expense.amount,
                ExpenseType::Credit => summary.credit += expense.amount,
                ExpenseType::Special => summary.special += expense.amount,
            }
            summary.counts[type_index(expense.expense_type)] += 1;
        }

        summary
    }

    /// Total for one expense type
    pub fn get(&self, expense_type: ExpenseType) -> Amount {
        match expense_type {
            ExpenseType::Daily => self.daily,
            ExpenseType::Credit => self.credit,
            ExpenseType::Special => self.special,
        }
    }

    /// Number of expenses of one type in the month
    pub fn count(&self, expense_type: ExpenseType) -> usize {
        self.counts[type_index(expense_type)]
    }

    /// Number of expenses in the month
    pub fn total_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Grand total across all types
    pub fn total(&self) -> Amount {
        self.daily + self.credit + self.special
    }

    /// Each type's share of the grand total; all zero when nothing was spent
    pub fn percentages(&self) -> CategoryShares {
        let total = self.total().value();
        let share = |amount: Amount| {
            if total > 0.0 {
                amount.value() / total * 100.0
            } else {
                0.0
            }
        };

        CategoryShares {
            daily: share(self.daily),
            credit: share(self.credit),
            special: share(self.special),
        }
    }

    fn share(&self, expense_type: ExpenseType) -> f64 {
        let shares = self.percentages();
        match expense_type {
            ExpenseType::Daily => shares.daily,
            ExpenseType::Credit => shares.credit,
            ExpenseType::Special => shares.special,
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, translator: &Translator, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} ({:04}-{:02})\n",
            translator.t(MessageKey::ThisMonthExpenses),
            self.year,
            self.month
        ));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14} {:>5} {:>8}\n",
            "",
            translator.t(MessageKey::Amount),
            translator.t(MessageKey::Count),
            translator.t(MessageKey::Share)
        ));

        for expense_type in ExpenseType::ALL {
            output.push_str(&format!(
                "{:<30} {:>14} {:>5} {:>7.1}%\n",
                translator.expense_type_heading(expense_type),
                self.get(expense_type).format_with_symbol(currency_symbol),
                self.count(expense_type),
                self.share(expense_type)
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>14} {:>5}\n",
            translator.t(MessageKey::GrandTotal),
            self.total().format_with_symbol(currency_symbol),
            self.total_count()
        ));

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> ExpenseResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let month = format!("{:04}-{:02}", self.year, self.month);

        csv_writer
            .write_record(["Month", "Type", "Amount", "Count", "Percentage"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        for expense_type in ExpenseType::ALL {
            csv_writer
                .write_record([
                    month.clone(),
                    expense_type.to_string(),
                    format!("{:.2}", self.get(expense_type).value()),
                    self.count(expense_type).to_string(),
                    format!("{:.2}", self.share(expense_type)),
                ])
                .map_err(|e| ExpenseError::Export(e.to_string()))?;
        }

        let total_share = if self.total().is_zero() { 0.0 } else { 100.0 };
        csv_writer
            .write_record([
                month,
                "total".to_string(),
                format!("{:.2}", self.total().value()),
                self.total_count().to_string(),
                format!("{:.2}", total_share),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        csv_writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))
    }
}

fn type_index(expense_type: ExpenseType) -> usize {
    match expense_type {
        ExpenseType::Daily => 0,
        ExpenseType::Credit => 1,
        ExpenseType::Special => 2,
    }
}

/// Summarize the calendar month containing `now`
pub fn monthly_summary<S: KeyValueStore>(
    store: &ExpenseStore<S>,
    now: NaiveDateTime,
) -> MonthlySummary {
    MonthlySummary::summarize(&store.get_all(), now.year(), now.month())
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(s: &str) -> ExpenseResult<(i32, u32)> {
    let s = s.trim();
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map(|d| (d.year(), d.month()))
        .map_err(|_| ExpenseError::InvalidArgument(format!("invalid month '{}'. Use YYYY-MM", s)))
}
