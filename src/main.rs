use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_clear_command, handle_config_command, handle_delete_command,
    handle_export_command, handle_language_command, handle_list_command, handle_show_command,
    handle_summary_command, AddArgs, ExportArgs, ListArgs, SummaryArgs,
};
use expense_tracker::config::ExpensePaths;
use expense_tracker::context::AppContext;
use expense_tracker::i18n::Language;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record daily, credit and special expenses, list them, \
                  and see what each kind cost you this month."
)]
struct Cli {
    /// Keep data in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one expense in full
    Show {
        /// Expense ID or unique prefix
        id: String,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unique prefix
        id: String,
    },

    /// Totals per expense type for a month
    Summary(SummaryArgs),

    /// Export all expenses to a file
    Export(ExportArgs),

    /// Delete every expense
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Set the display language (toggles when omitted)
    Language {
        /// english or tamil
        language: Option<Language>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "expense_tracker=warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let mut ctx = if cli.ephemeral {
        AppContext::ephemeral(paths)?
    } else {
        AppContext::new(paths)?
    };

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&ctx, args)?,
        Some(Commands::List(args)) => handle_list_command(&ctx, args)?,
        Some(Commands::Show { id }) => handle_show_command(&ctx, &id)?,
        Some(Commands::Delete { id }) => handle_delete_command(&ctx, &id)?,
        Some(Commands::Summary(args)) => handle_summary_command(&ctx, args)?,
        Some(Commands::Export(args)) => {
            handle_export_command(&ctx, args)?;
        }
        Some(Commands::Clear { yes }) => handle_clear_command(&ctx, yes)?,
        Some(Commands::Language { language }) => handle_language_command(&mut ctx, language)?,
        Some(Commands::Config) => handle_config_command(&ctx)?,
        None => {
            println!("Expense Tracker - daily, credit and special expenses");
            println!();
            println!("Run 'expenses --help' for usage information.");
        }
    }

    Ok(())
}
