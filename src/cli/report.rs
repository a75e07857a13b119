//! Report CLI commands
//!
//! Monthly totals per expense type.

use chrono::{Datelike, Local};
use clap::Args;
use std::io;

use crate::context::AppContext;
use crate::error::ExpenseResult;
use crate::reports::{monthly_summary, parse_month, MonthlySummary};

/// Arguments for `summary`
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Month to summarize (YYYY-MM), defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,
    /// Write the summary as CSV instead of a table
    #[arg(long)]
    pub csv: bool,
}

/// Build the summary requested by `args`
pub fn summary_for(ctx: &AppContext, args: &SummaryArgs) -> ExpenseResult<MonthlySummary> {
    match &args.month {
        Some(month) => {
            let (year, month) = parse_month(month)?;
            Ok(MonthlySummary::summarize(&ctx.store.get_all(), year, month))
        }
        None => {
            let now = Local::now().naive_local();
            tracing::debug!(year = now.year(), month = now.month(), "summarizing current month");
            Ok(monthly_summary(&ctx.store, now))
        }
    }
}

/// Handle `summary`
pub fn handle_summary_command(ctx: &AppContext, args: SummaryArgs) -> ExpenseResult<()> {
    let summary = summary_for(ctx, &args)?;

    if args.csv {
        summary.export_csv(io::stdout().lock())?;
    } else {
        print!(
            "{}",
            summary.format_terminal(&ctx.translator(), &ctx.settings.currency_symbol)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpensePaths;
    use crate::models::{Amount, Expense, ExpenseDate, ExpenseType};
    use tempfile::TempDir;

    #[test]
    fn test_summary_for_explicit_month() {
        let temp_dir = TempDir::new().unwrap();
        let ctx =
            AppContext::ephemeral(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()))
                .unwrap();

        for (expense_type, amount, date) in [
            (ExpenseType::Daily, 100.0, "2025-03-05T09:00:00"),
            (ExpenseType::Credit, 200.0, "2025-03-20T18:30:00"),
            (ExpenseType::Special, 300.0, "2025-03-31T23:59:00"),
            (ExpenseType::Daily, 999.0, "2025-04-01T00:00:00"),
        ] {
            ctx.store
                .save(Expense::new(
                    expense_type,
                    Amount::new(amount).unwrap(),
                    "Item",
                    ExpenseDate::from_raw(date),
                ))
                .unwrap();
        }

        let args = SummaryArgs {
            month: Some("2025-03".to_string()),
            csv: false,
        };
        let summary = summary_for(&ctx, &args).unwrap();

        assert_eq!(summary.total(), Amount::new(600.0).unwrap());
        assert_eq!(summary.total_count(), 3);
    }

    #[test]
    fn test_summary_rejects_bad_month() {
        let temp_dir = TempDir::new().unwrap();
        let ctx =
            AppContext::ephemeral(ExpensePaths::with_base_dir(temp_dir.path().to_path_buf()))
                .unwrap();

        let args = SummaryArgs {
            month: Some("2025-13".to_string()),
            csv: false,
        };
        assert!(summary_for(&ctx, &args).unwrap_err().is_invalid_argument());
    }
}
