//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence (language, currency, defaults)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
