//! Amount type for expense values
//!
//! Amounts are plain, currency-agnostic numbers. Rounding to a smallest unit
//! is left to the caller; the only invariant is that an amount is finite and
//! never negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::ExpenseError;

/// Largest accepted amount
///
/// Keeps sums over any realistic number of expenses finite.
pub const MAX_AMOUNT: f64 = 1e15;

/// A non-negative monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting negative, non-finite and oversized values
    pub fn new(value: f64) -> Result<Self, ExpenseError> {
        let amount = Self::checked(value)?;
        if value > MAX_AMOUNT {
            return Err(ExpenseError::InvalidArgument(format!(
                "amount must not exceed {}, got {}",
                MAX_AMOUNT, value
            )));
        }
        Ok(amount)
    }

    /// Finite and non-negative; the only checks applied to stored values,
    /// whose totals may exceed [`MAX_AMOUNT`]
    fn checked(value: f64) -> Result<Self, ExpenseError> {
        if !value.is_finite() {
            return Err(ExpenseError::InvalidArgument(format!(
                "amount must be a finite number, got {}",
                value
            )));
        }
        if value < 0.0 {
            return Err(ExpenseError::InvalidArgument(format!(
                "amount must not be negative, got {}",
                value
            )));
        }
        // Normalise -0.0 so it displays and compares as zero
        Ok(Self(value + 0.0))
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "10.50", "₹10.50", "$1,250", "₹1,00,000", "10".
    /// Commas must sit in thousands (`1,234,567`) or lakh (`12,34,567`)
    /// positions.
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let trimmed = s.trim();
        let invalid = || ExpenseError::InvalidArgument(format!("invalid amount: '{}'", trimmed));

        let number = trimmed.trim_start_matches(['₹', '$']).trim();
        let (integer_part, fraction) = number.split_once('.').unwrap_or((number, ""));
        if fraction.contains(',')
            || (integer_part.contains(',') && !has_valid_grouping(integer_part))
        {
            return Err(invalid());
        }

        let cleaned: String = number.chars().filter(|c| *c != ',').collect();
        let value: f64 = cleaned.parse().map_err(|_| invalid())?;

        Self::new(value)
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

/// Digit groups of `1,234,567` or `12,34,567`
fn has_valid_grouping(integer_part: &str) -> bool {
    let groups: Vec<&str> = integer_part.split(',').collect();
    let Some((last, rest)) = groups.split_last() else {
        return false;
    };
    let Some((first, middle)) = rest.split_first() else {
        return false;
    };

    let digits = |g: &str, len: usize| g.len() == len && g.bytes().all(|b| b.is_ascii_digit());
    let leading_ok = (1..=3).contains(&first.len()) && first.bytes().all(|b| b.is_ascii_digit());

    let thousands = middle.iter().all(|g| digits(g, 3));
    let lakh = first.len() <= 2 && middle.iter().all(|g| digits(g, 2));

    leading_ok && digits(last, 3) && (thousands || lakh)
}

impl TryFrom<f64> for Amount {
    type Error = ExpenseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::checked(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self((self.0 + other.0).min(f64::MAX))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
