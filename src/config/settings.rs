//! User settings for the expense tracker
//!
//! Display language, currency symbol and the defaults applied to newly
//! recorded expenses.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::i18n::Language;
use crate::models::PaymentMethod;
use crate::storage::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Active display language
    #[serde(default)]
    pub language: Language,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for listings (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Payment method used when `add` is not given one
    #[serde(default)]
    pub default_payment_method: PaymentMethod,

    /// Whether new expenses get the reminder flag unless told otherwise
    #[serde(default)]
    pub reminders_enabled_by_default: bool,
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_payment_method: PaymentMethod::default(),
            reminders_enabled_by_default: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    ///
    /// A missing file is not written here; the caller decides when to persist.
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        read_json(paths.settings_file())
            .map_err(|e| ExpenseError::Config(format!("Failed to load settings: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.default_payment_method, PaymentMethod::Cash);
        assert!(!settings.reminders_enabled_by_default);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            language: Language::Tamil,
            default_payment_method: PaymentMethod::Upi,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.language, Language::Tamil);
        assert_eq!(loaded.default_payment_method, PaymentMethod::Upi);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"language":"tamil"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.language, Language::Tamil);
        assert_eq!(loaded.currency_symbol, "₹");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
