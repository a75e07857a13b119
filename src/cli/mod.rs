//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the expense store.

pub mod expense;
pub mod export;
pub mod report;
pub mod settings;

pub use expense::{
    handle_add_command, handle_clear_command, handle_delete_command, handle_list_command,
    handle_show_command, AddArgs, ListArgs,
};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_summary_command, SummaryArgs};
pub use settings::{handle_config_command, handle_language_command};
