//! Reports module for the expense tracker
//!
//! Derived, read-only views over the expense collection.

pub mod monthly;

pub use monthly::{monthly_summary, parse_month, CategoryShares, MonthlySummary};
