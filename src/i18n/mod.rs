//! Localization
//!
//! Maps the closed set of message keys to display strings in the active
//! language. The active language lives in [`Settings`] and reaches the
//! translator through the application context; there is no global state.
//!
//! [`Settings`]: crate::config::Settings

pub mod messages;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;
use crate::models::{ExpenseType, PaymentMethod};

pub use messages::MessageKey;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    /// The other supported language
    pub fn toggled(&self) -> Self {
        match self {
            Self::English => Self::Tamil,
            Self::Tamil => Self::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::Tamil => write!(f, "tamil"),
        }
    }
}

impl FromStr for Language {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Self::English),
            "tamil" | "ta" => Ok(Self::Tamil),
            other => Err(ExpenseError::InvalidArgument(format!(
                "unsupported language '{}'. Supported: english, tamil",
                other
            ))),
        }
    }
}

/// Looks up display strings for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Display string for `key` in the active language
    pub fn t(&self, key: MessageKey) -> &'static str {
        match self.language {
            Language::English => messages::english(key),
            Language::Tamil => messages::tamil(key),
        }
    }

    /// Short label for an expense type
    pub fn expense_type(&self, expense_type: ExpenseType) -> &'static str {
        self.t(match expense_type {
            ExpenseType::Daily => MessageKey::Daily,
            ExpenseType::Credit => MessageKey::Credit,
            ExpenseType::Special => MessageKey::Special,
        })
    }

    /// Heading for an expense type's section of the summary
    pub fn expense_type_heading(&self, expense_type: ExpenseType) -> &'static str {
        self.t(match expense_type {
            ExpenseType::Daily => MessageKey::DailyExpenses,
            ExpenseType::Credit => MessageKey::CreditExpenses,
            ExpenseType::Special => MessageKey::SpecialExpenses,
        })
    }

    /// Label for a payment method
    pub fn payment_method(&self, method: PaymentMethod) -> &'static str {
        self.t(match method {
            PaymentMethod::Cash => MessageKey::Cash,
            PaymentMethod::Upi => MessageKey::Upi,
            PaymentMethod::Card => MessageKey::Card,
        })
    }

    pub fn yes_no(&self, value: bool) -> &'static str {
        self.t(if value { MessageKey::Yes } else { MessageKey::No })
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_translated_in_every_language() {
        for language in [Language::English, Language::Tamil] {
            let translator = Translator::new(language);
            for key in MessageKey::ALL {
                assert!(
                    !translator.t(key).trim().is_empty(),
                    "{:?} has no {} text",
                    key,
                    language
                );
            }
        }
    }

    #[test]
    fn test_lookup_follows_language() {
        let en = Translator::new(Language::English);
        let ta = Translator::new(Language::Tamil);

        assert_eq!(en.t(MessageKey::Amount), "Amount");
        assert_eq!(ta.t(MessageKey::Amount), "தொகை");
        assert_eq!(en.expense_type(ExpenseType::Credit), "Credit");
        assert_eq!(ta.payment_method(PaymentMethod::Cash), "ரொக்கம்");
        assert_eq!(ta.yes_no(true), "ஆம்");
    }

    #[test]
    fn test_language_parse_and_toggle() {
        assert_eq!("Tamil".parse::<Language>().unwrap(), Language::Tamil);
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert!("french".parse::<Language>().unwrap_err().is_invalid_argument());

        assert_eq!(Language::English.toggled(), Language::Tamil);
        assert_eq!(Language::Tamil.toggled(), Language::English);
    }

    #[test]
    fn test_language_serialization() {
        assert_eq!(
            serde_json::to_string(&Language::Tamil).unwrap(),
            "\"tamil\""
        );
        let parsed: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
