//! Storage layer for the expense tracker
//!
//! Provides the key-value persistence providers and the expense store that
//! keeps the whole collection under one key.

pub mod expenses;
pub mod file_io;
pub mod kv;

pub use expenses::{ExpenseStore, EXPENSES_KEY};
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Provider handle used by the application context
pub type SharedProvider = Box<dyn KeyValueStore>;
