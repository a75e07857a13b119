//! Application context
//!
//! Bundles the resolved paths, the loaded settings and the expense store
//! that every CLI command works against.

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::i18n::{Language, Translator};
use crate::storage::{ExpenseStore, FileStore, MemoryStore, SharedProvider};

/// Everything a command needs to run
pub struct AppContext {
    pub paths: ExpensePaths,
    pub settings: Settings,
    pub store: ExpenseStore<SharedProvider>,
    /// False for ephemeral runs, which never touch disk
    persistent: bool,
}

impl AppContext {
    /// Open the file-backed store under `paths`, loading settings from disk
    pub fn new(paths: ExpensePaths) -> ExpenseResult<Self> {
        paths.ensure_directories()?;
        let settings = Settings::load_or_create(&paths)?;
        let provider: SharedProvider = Box::new(FileStore::new(paths.data_dir()));

        tracing::debug!(data_dir = %paths.data_dir().display(), "opened file store");

        Ok(Self {
            paths,
            settings,
            store: ExpenseStore::new(provider),
            persistent: true,
        })
    }

    /// Context backed by an in-memory store; settings are read but never saved
    pub fn ephemeral(paths: ExpensePaths) -> ExpenseResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let provider: SharedProvider = Box::new(MemoryStore::new());

        Ok(Self {
            paths,
            settings,
            store: ExpenseStore::new(provider),
            persistent: false,
        })
    }

    /// Whether changes outlive this run
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Translator for the configured language
    pub fn translator(&self) -> Translator {
        Translator::new(self.settings.language)
    }

    /// Switch the display language, persisting the choice unless ephemeral
    pub fn set_language(&mut self, language: Language) -> ExpenseResult<()> {
        self.settings.language = language;
        if self.persistent {
            self.settings.save(&self.paths)?;
        }
        Ok(())
    }
}
