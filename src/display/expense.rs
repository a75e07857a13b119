//! Expense display formatting
//!
//! Tables and detail views for the terminal, with labels in the active
//! language.

use std::fmt::Write;

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::i18n::{MessageKey, Translator};
use crate::models::Expense;

/// Date shown for an expense
///
/// Dates that don't parse, or a `date_format` chrono rejects, fall back to
/// the stored text.
pub fn format_expense_date(expense: &Expense, date_format: &str) -> String {
    if let Some(at) = expense.occurred_at() {
        let mut output = String::new();
        if write!(output, "{}", at.format(date_format)).is_ok() {
            return output;
        }
    }
    expense.date.as_str().to_string()
}

/// Format a list of expenses as a table
pub fn format_expense_table(
    expenses: &[Expense],
    translator: &Translator,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return format!("{}\n", translator.t(MessageKey::NoExpenses));
    }

    let mut builder = Builder::default();
    builder.push_record([
        translator.t(MessageKey::Id).to_string(),
        translator.t(MessageKey::Date).to_string(),
        translator.t(MessageKey::Type).to_string(),
        translator.t(MessageKey::Purpose).to_string(),
        translator.t(MessageKey::Amount).to_string(),
        translator.t(MessageKey::PaymentMethod).to_string(),
    ]);

    for expense in expenses {
        builder.push_record([
            expense.id.short().to_string(),
            format_expense_date(expense, date_format),
            translator.expense_type(expense.expense_type).to_string(),
            truncate(&expense.purpose, 30),
            expense.amount.format_with_symbol(currency_symbol),
            translator.payment_method(expense.payment_method).to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{}\n", table)
}

/// Format expense details for display
pub fn format_expense_details(
    expense: &Expense,
    translator: &Translator,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    let rows = [
        (MessageKey::Id, expense.id.to_string()),
        (MessageKey::Date, format_expense_date(expense, date_format)),
        (
            MessageKey::Type,
            translator.expense_type(expense.expense_type).to_string(),
        ),
        (MessageKey::Purpose, expense.purpose.clone()),
        (
            MessageKey::Amount,
            expense.amount.format_with_symbol(currency_symbol),
        ),
        (
            MessageKey::PaymentMethod,
            translator.payment_method(expense.payment_method).to_string(),
        ),
        (
            MessageKey::Reminder,
            translator.yes_no(expense.reminder_enabled).to_string(),
        ),
    ];

    let mut output = String::new();
    for (key, value) in rows {
        output.push_str(&format!("{:<16} {}\n", format!("{}:", translator.t(key)), value));
    }

    if let Some(notes) = &expense.notes {
        output.push_str(&format!(
            "{:<16} {}\n",
            format!("{}:", translator.t(MessageKey::Notes)),
            notes
        ));
    }

    output
}

/// Truncate to `max_chars` characters, marking the cut with an ellipsis
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
