//! Expense Tracker - personal expense recording and monthly summaries
//!
//! This library keeps a list of expenses, each tagged daily, credit or
//! special, in a key-value store, and reports how much of each kind was spent
//! in a calendar month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `context`: Paths, settings and store bundled for command handlers
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, amounts, ids)
//! - `storage`: Key-value providers and the expense store
//! - `reports`: Monthly summary
//! - `export`: CSV, JSON and YAML export
//! - `i18n`: English and Tamil display strings
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::models::{Amount, Expense, ExpenseDate, ExpenseType};
//! use expense_tracker::reports::monthly_summary;
//! use expense_tracker::storage::{ExpenseStore, MemoryStore};
//!
//! let store = ExpenseStore::new(MemoryStore::new());
//! let date = ExpenseDate::from_raw("2025-06-01T09:30:00");
//! store
//!     .save(Expense::new(ExpenseType::Daily, Amount::new(100.0)?, "Vegetables", date))?;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let summary = monthly_summary(&store, now);
//! assert_eq!(summary.total(), Amount::new(100.0)?);
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod export;
pub mod i18n;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
