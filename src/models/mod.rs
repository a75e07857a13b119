//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its closed category and payment-method tags, and
//! the amount and id newtypes that carry its invariants.

pub mod amount;
pub mod expense;
pub mod ids;

pub use amount::{Amount, MAX_AMOUNT};
pub use expense::{Expense, ExpenseDate, ExpenseType, PaymentMethod};
pub use ids::ExpenseId;
