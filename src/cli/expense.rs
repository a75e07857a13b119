//! Expense CLI commands
//!
//! Implements adding, listing, showing, deleting and clearing expenses.

use clap::Args;

use crate::context::AppContext;
use crate::display::expense::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::i18n::MessageKey;
use crate::models::{Amount, Expense, ExpenseDate, ExpenseType, PaymentMethod};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Expense type (daily, credit, special)
    pub expense_type: ExpenseType,
    /// Amount spent (e.g. "250", "₹1,200.50")
    pub amount: String,
    /// What the money was for
    #[arg(short, long)]
    pub purpose: String,
    /// Free-text notes
    #[arg(short, long)]
    pub notes: Option<String>,
    /// When it happened (YYYY-MM-DD or YYYY-MM-DDTHH:MM), defaults to now
    #[arg(short, long)]
    pub date: Option<String>,
    /// Payment method (cash, upi, card), defaults to the configured one
    #[arg(long)]
    pub payment: Option<PaymentMethod>,
    /// Flag the expense for a reminder
    #[arg(long)]
    pub reminder: bool,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one expense type
    #[arg(short = 't', long = "type")]
    pub expense_type: Option<ExpenseType>,
}

/// Handle `add`
pub fn handle_add_command(ctx: &AppContext, args: AddArgs) -> ExpenseResult<()> {
    let amount = Amount::parse(&args.amount)?;

    let date = match args.date {
        Some(date_str) => ExpenseDate::parse(&date_str)?,
        None => ExpenseDate::now(),
    };

    let mut expense = Expense::new(args.expense_type, amount, args.purpose, date)
        .with_payment_method(
            args.payment
                .unwrap_or(ctx.settings.default_payment_method),
        )
        .with_reminder(args.reminder || ctx.settings.reminders_enabled_by_default);

    if let Some(notes) = args.notes {
        expense = expense.with_notes(notes);
    }

    let id = expense.id.clone();
    ctx.store.save(expense).map_err(with_recovery_hint)?;

    let translator = ctx.translator();
    println!("{}: {}", translator.t(MessageKey::ExpenseSaved), id);

    Ok(())
}

/// Handle `list`
pub fn handle_list_command(ctx: &AppContext, args: ListArgs) -> ExpenseResult<()> {
    let expenses = ctx.store.get_sorted_by_date_desc(args.expense_type);

    print!(
        "{}",
        format_expense_table(
            &expenses,
            &ctx.translator(),
            &ctx.settings.currency_symbol,
            &ctx.settings.date_format,
        )
    );

    Ok(())
}

/// Handle `show`
pub fn handle_show_command(ctx: &AppContext, id: &str) -> ExpenseResult<()> {
    let expense = resolve_expense(ctx, id)?;

    print!(
        "{}",
        format_expense_details(
            &expense,
            &ctx.translator(),
            &ctx.settings.currency_symbol,
            &ctx.settings.date_format,
        )
    );

    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command(ctx: &AppContext, id: &str) -> ExpenseResult<()> {
    let expense = resolve_expense(ctx, id)?;
    let translator = ctx.translator();

    if ctx
        .store
        .delete_by_id(&expense.id)
        .map_err(with_recovery_hint)?
    {
        println!("{}: {}", translator.t(MessageKey::ExpenseDeleted), expense.id);
    } else {
        println!("{}: {}", translator.t(MessageKey::ExpenseNotFound), expense.id);
    }

    Ok(())
}

/// Handle `clear`
pub fn handle_clear_command(ctx: &AppContext, confirmed: bool) -> ExpenseResult<()> {
    let translator = ctx.translator();

    if !confirmed {
        println!("{}", translator.t(MessageKey::ClearDataWarning));
        return Ok(());
    }

    let removed = ctx.store.count();
    ctx.store.clear()?;
    tracing::info!(removed, "cleared all expenses");

    println!("{}", translator.t(MessageKey::DataCleared));
    Ok(())
}

/// Point at `clear` when the stored collection can't be parsed
fn with_recovery_hint(err: ExpenseError) -> ExpenseError {
    match err {
        ExpenseError::CorruptData(detail) => ExpenseError::CorruptData(format!(
            "{}. Nothing was changed; run 'expenses clear --yes' to discard the \
             stored expenses and start over",
            detail
        )),
        other => other,
    }
}

/// Find an expense by full id or unambiguous id prefix
pub fn resolve_expense(ctx: &AppContext, query: &str) -> ExpenseResult<Expense> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ExpenseError::InvalidArgument("expense id is empty".into()));
    }

    let expenses = ctx.store.get_all();

    if let Some(exact) = expenses.iter().find(|e| e.id.as_str() == query) {
        return Ok(exact.clone());
    }

    let matches: Vec<&Expense> = expenses
        .iter()
        .filter(|e| e.id.as_str().starts_with(query))
        .collect();

    match matches.as_slice() {
        [only] => Ok((*only).clone()),
        [] => Err(ExpenseError::expense_not_found(query)),
        many => Err(ExpenseError::InvalidArgument(format!(
            "'{}' matches {} expenses; give more of the id",
            query,
            many.len()
        ))),
    }
}
