//! Expense model
//!
//! A single financial entry with a closed category tag and payment method.
//! The serialized shape (camelCase keys, lowercase enum tags) is the
//! persisted layout of the expense collection.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use super::ids::ExpenseId;
use crate::error::{ExpenseError, ExpenseResult};

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    /// Everyday spending
    Daily,
    /// Spending on a credit card
    Credit,
    /// One-off or occasional spending
    Special,
}

impl ExpenseType {
    /// All expense types, in display order
    pub const ALL: [ExpenseType; 3] = [Self::Daily, Self::Credit, Self::Special];

    /// Tag used in the persisted layout
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Credit => "credit",
            Self::Special => "special",
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseType {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "credit" => Ok(Self::Credit),
            "special" => Ok(Self::Special),
            other => Err(ExpenseError::InvalidArgument(format!(
                "unknown expense type '{}'. Valid types: daily, credit, special",
                other
            ))),
        }
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Upi,
    Card,
}

impl PaymentMethod {
    /// All payment methods, in display order
    pub const ALL: [PaymentMethod; 3] = [Self::Cash, Self::Upi, Self::Card];

    /// Tag used in the persisted layout
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Upi => "upi",
            Self::Card => "card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(Self::Cash),
            "upi" => Ok(Self::Upi),
            "card" => Ok(Self::Card),
            other => Err(ExpenseError::InvalidArgument(format!(
                "unknown payment method '{}'. Valid methods: cash, upi, card",
                other
            ))),
        }
    }
}

/// When an expense occurred, as stored
///
/// The raw string is kept so that records written by other producers survive
/// a load/save cycle untouched. Interpretation happens in [`parse_local`],
/// which may fail on such records.
///
/// [`parse_local`]: ExpenseDate::parse_local
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseDate(String);

/// Formats accepted for dates without an explicit offset
const NAIVE_DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

impl ExpenseDate {
    /// Store a local date and time
    pub fn from_local(datetime: NaiveDateTime) -> Self {
        Self(datetime.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    /// Store a calendar date (midnight local time)
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Store an absolute instant
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        Self(datetime.to_rfc3339())
    }

    /// The current local time
    pub fn now() -> Self {
        Self::from_local(Local::now().naive_local())
    }

    /// Wrap a raw stored value without interpreting it
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Parse user input, rejecting anything [`parse_local`] cannot read
    ///
    /// [`parse_local`]: ExpenseDate::parse_local
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let date = Self::from_raw(s.trim());
        if date.parse_local().is_none() {
            return Err(ExpenseError::InvalidArgument(format!(
                "invalid date '{}'. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM",
                s.trim()
            )));
        }
        Ok(date)
    }

    /// The raw stored value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the stored value as a local date and time
    ///
    /// Values carrying an offset (RFC 3339) are converted to local time;
    /// values without one are taken as local already. A bare date means
    /// midnight. Returns `None` when the value cannot be read.
    pub fn parse_local(&self) -> Option<NaiveDateTime> {
        let s = self.0.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Local).naive_local());
        }

        for format in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Some(dt);
            }
        }

        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

impl fmt::Display for ExpenseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, assigned by the creator
    pub id: ExpenseId,

    /// Category tag
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,

    /// Amount spent
    pub amount: Amount,

    /// What the money was for
    pub purpose: String,

    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the expense occurred (not when it was saved)
    pub date: ExpenseDate,

    /// How it was paid
    pub payment_method: PaymentMethod,

    /// Informational reminder flag; nothing is scheduled from it
    #[serde(default)]
    pub reminder_enabled: bool,
}

impl Expense {
    /// Create a new expense with a fresh id, paid in cash, no reminder
    pub fn new(
        expense_type: ExpenseType,
        amount: Amount,
        purpose: impl Into<String>,
        date: ExpenseDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            expense_type,
            amount,
            purpose: purpose.into(),
            notes: None,
            date,
            payment_method: PaymentMethod::default(),
            reminder_enabled: false,
        }
    }

    /// Replace the generated id
    pub fn with_id(mut self, id: impl Into<ExpenseId>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach notes; blank notes are dropped
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    /// Set the payment method
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// Set the reminder flag
    pub fn with_reminder(mut self, enabled: bool) -> Self {
        self.reminder_enabled = enabled;
        self
    }

    /// When the expense occurred, if the stored date is readable
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        self.date.parse_local()
    }

    /// Whether the expense falls in the given calendar month
    ///
    /// Unreadable dates never match.
    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.occurred_at()
            .map(|dt| dt.year() == year && dt.month() == month)
            .unwrap_or(false)
    }

    /// Validate the expense before it is stored
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.id.is_empty() {
            return Err(ExpenseError::InvalidArgument(
                "expense id must not be empty".into(),
            ));
        }

        // Amount is checked on construction; re-check for values built by hand
        Amount::new(self.amount.value())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn sample() -> Expense {
        Expense::new(
            ExpenseType::Daily,
            Amount::new(120.0).unwrap(),
            "Groceries",
            ExpenseDate::from_local(dt(2025, 3, 14, 18, 30)),
        )
    }

    #[test]
    fn test_expense_type_parse() {
        assert_eq!("daily".parse::<ExpenseType>().unwrap(), ExpenseType::Daily);
        assert_eq!("Credit".parse::<ExpenseType>().unwrap(), ExpenseType::Credit);
        assert_eq!(
            " SPECIAL ".parse::<ExpenseType>().unwrap(),
            ExpenseType::Special
        );
        assert!("weekly"
            .parse::<ExpenseType>()
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("upi".parse::<PaymentMethod>().unwrap(), PaymentMethod::Upi);
        assert_eq!("CARD".parse::<PaymentMethod>().unwrap(), PaymentMethod::Card);
        assert!("cheque"
            .parse::<PaymentMethod>()
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_new_defaults() {
        let expense = sample();
        assert_eq!(expense.payment_method, PaymentMethod::Cash);
        assert!(!expense.reminder_enabled);
        assert!(expense.notes.is_none());
        assert!(!expense.id.is_empty());
    }

    #[test]
    fn test_builders() {
        let expense = sample()
            .with_id("abc")
            .with_notes("weekly shop")
            .with_payment_method(PaymentMethod::Upi)
            .with_reminder(true);

        assert_eq!(expense.id.as_str(), "abc");
        assert_eq!(expense.notes.as_deref(), Some("weekly shop"));
        assert_eq!(expense.payment_method, PaymentMethod::Upi);
        assert!(expense.reminder_enabled);

        let blank = sample().with_notes("   ");
        assert!(blank.notes.is_none());
    }

    #[test]
    fn test_serialized_layout() {
        let expense = sample()
            .with_id("1712345678901")
            .with_payment_method(PaymentMethod::Upi);
        let value = serde_json::to_value(&expense).unwrap();

        assert_eq!(value["id"], "1712345678901");
        assert_eq!(value["type"], "daily");
        assert_eq!(value["amount"], 120.0);
        assert_eq!(value["purpose"], "Groceries");
        assert_eq!(value["date"], "2025-03-14T18:30:00");
        assert_eq!(value["paymentMethod"], "upi");
        assert_eq!(value["reminderEnabled"], false);
        assert!(value.get("notes").is_none());
    }

    #[test]
    fn test_deserialize_foreign_record() {
        let json = r#"{
            "id": "1700000000000",
            "type": "special",
            "amount": 2500,
            "purpose": "Wedding gift",
            "notes": "cousin",
            "date": "2024-11-02T04:30:00.000Z",
            "paymentMethod": "card",
            "reminderEnabled": true
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.expense_type, ExpenseType::Special);
        assert_eq!(expense.amount.value(), 2500.0);
        assert_eq!(expense.payment_method, PaymentMethod::Card);
        assert!(expense.reminder_enabled);
        assert!(expense.occurred_at().is_some());
    }

    #[test]
    fn test_deserialize_rejects_closed_set_violations() {
        let bad_type = r#"{"id":"1","type":"weekly","amount":1,"purpose":"x",
            "date":"2024-01-01","paymentMethod":"cash","reminderEnabled":false}"#;
        assert!(serde_json::from_str::<Expense>(bad_type).is_err());

        let bad_method = r#"{"id":"1","type":"daily","amount":1,"purpose":"x",
            "date":"2024-01-01","paymentMethod":"cheque","reminderEnabled":false}"#;
        assert!(serde_json::from_str::<Expense>(bad_method).is_err());

        let negative = r#"{"id":"1","type":"daily","amount":-1,"purpose":"x",
            "date":"2024-01-01","paymentMethod":"cash","reminderEnabled":false}"#;
        assert!(serde_json::from_str::<Expense>(negative).is_err());
    }

    #[test]
    fn test_date_parsing() {
        assert_eq!(
            ExpenseDate::from_raw("2025-03-14").parse_local(),
            Some(dt(2025, 3, 14, 0, 0))
        );
        assert_eq!(
            ExpenseDate::from_raw("2025-03-14T18:30").parse_local(),
            Some(dt(2025, 3, 14, 18, 30))
        );
        assert_eq!(
            ExpenseDate::from_raw("2025-03-14 18:30:00").parse_local(),
            Some(dt(2025, 3, 14, 18, 30))
        );
        assert!(ExpenseDate::from_raw("2025-03-14T18:30:00+05:30")
            .parse_local()
            .is_some());
        assert!(ExpenseDate::from_raw("yesterday").parse_local().is_none());
        assert!(ExpenseDate::from_raw("").parse_local().is_none());
    }

    #[test]
    fn test_date_parse_rejects_garbage() {
        assert!(ExpenseDate::parse("2025-02-30").is_err());
        assert!(ExpenseDate::parse("soon").is_err());
        assert_eq!(
            ExpenseDate::parse(" 2025-02-28 ").unwrap().as_str(),
            "2025-02-28"
        );
    }

    #[test]
    fn test_dates_from_calendar_day_and_instant() {
        let day = ExpenseDate::from_date(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(day.as_str(), "2025-03-05");
        assert_eq!(day.parse_local(), Some(dt(2025, 3, 5, 0, 0)));

        let instant = Utc.with_ymd_and_hms(2025, 3, 5, 12, 0, 0).unwrap();
        let stored = ExpenseDate::from_utc(instant);
        assert!(stored.as_str().ends_with("+00:00"));
        assert_eq!(
            stored.parse_local(),
            Some(instant.with_timezone(&Local).naive_local())
        );
    }

    #[test]
    fn test_is_in_month() {
        let expense = sample();
        assert!(expense.is_in_month(2025, 3));
        assert!(!expense.is_in_month(2025, 4));
        assert!(!expense.is_in_month(2024, 3));

        let mut unreadable = sample();
        unreadable.date = ExpenseDate::from_raw("not a date");
        assert!(!unreadable.is_in_month(2025, 3));
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate().is_ok());
        assert!(sample().with_id("").validate().unwrap_err().is_invalid_argument());
    }
}
