//! Expense store
//!
//! Keeps the whole expense collection as one JSON array under a single key.
//! Every operation is a full read (and, for mutations, a full write back) of
//! that array; there is no index and no partial update.

use std::cmp::Reverse;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, ExpenseType};

use super::kv::KeyValueStore;

/// Key holding the serialized expense collection
pub const EXPENSES_KEY: &str = "expenses";

/// Durable, whole-collection persistence of expenses
///
/// Mutations through one `ExpenseStore` are serialized by an internal mutex.
/// Separate stores over the same provider are not coordinated: two of them
/// writing at once can lose an update, since each writes back the collection
/// it read.
pub struct ExpenseStore<S> {
    provider: S,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    /// Create a store on top of a key-value provider
    pub fn new(provider: S) -> Self {
        Self {
            provider,
            write_lock: Mutex::new(()),
        }
    }

    /// The underlying provider
    pub fn provider(&self) -> &S {
        &self.provider
    }

    /// Read every expense, in insertion order
    ///
    /// Never fails: a missing value is an empty collection, and read or parse
    /// failures are logged and reported as empty too.
    pub fn get_all(&self) -> Vec<Expense> {
        match self.load() {
            Ok(expenses) => expenses,
            Err(e) => {
                warn!(error = %e, "failed to read expenses, treating collection as empty");
                Vec::new()
            }
        }
    }

    /// Read every expense of one type, preserving relative order
    pub fn get_by_type(&self, expense_type: ExpenseType) -> Vec<Expense> {
        self.get_all()
            .into_iter()
            .filter(|e| e.expense_type == expense_type)
            .collect()
    }

    /// Look up one expense by id
    pub fn get_by_id(&self, id: &ExpenseId) -> Option<Expense> {
        self.get_all().into_iter().find(|e| &e.id == id)
    }

    /// Expenses newest first, optionally restricted to one type
    ///
    /// Expenses with unreadable dates sort last, in insertion order.
    pub fn get_sorted_by_date_desc(&self, expense_type: Option<ExpenseType>) -> Vec<Expense> {
        let mut expenses = match expense_type {
            Some(t) => self.get_by_type(t),
            None => self.get_all(),
        };
        expenses.sort_by_key(|e| Reverse(e.occurred_at()));
        expenses
    }

    /// Number of stored expenses
    pub fn count(&self) -> usize {
        self.get_all().len()
    }

    /// Append an expense and write the collection back
    ///
    /// Rejects invalid expenses and ids already present. Read and write
    /// failures propagate: the record has not been stored when this errors.
    /// A stored collection that fails to parse is `CorruptData` and is left
    /// as it is; `clear` is the way to discard it.
    pub fn save(&self, expense: Expense) -> ExpenseResult<()> {
        expense.validate()?;

        let _guard = self.lock()?;
        let mut expenses = self.load()?;

        if expenses.iter().any(|e| e.id == expense.id) {
            return Err(ExpenseError::duplicate_expense(expense.id.as_str()));
        }

        debug!(id = %expense.id, expense_type = %expense.expense_type, "saving expense");
        expenses.push(expense);
        self.store(&expenses)
    }

    /// Remove the expense with `id`
    ///
    /// Returns whether anything was removed. An absent id is a no-op and
    /// nothing is written.
    pub fn delete_by_id(&self, id: &ExpenseId) -> ExpenseResult<bool> {
        let _guard = self.lock()?;
        let mut expenses = self.load()?;

        let before = expenses.len();
        expenses.retain(|e| &e.id != id);
        if expenses.len() == before {
            debug!(id = %id, "no expense to delete");
            return Ok(false);
        }

        debug!(id = %id, "deleting expense");
        self.store(&expenses)?;
        Ok(true)
    }

    /// Drop the whole collection
    pub fn clear(&self) -> ExpenseResult<()> {
        let _guard = self.lock()?;
        debug!("clearing all expenses");
        self.provider.remove(EXPENSES_KEY)
    }

    fn lock(&self) -> ExpenseResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|e| ExpenseError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Strict read used by mutations: corrupt data is an error, never
    /// silently replaced
    fn load(&self) -> ExpenseResult<Vec<Expense>> {
        match self.provider.get(EXPENSES_KEY)? {
            None => Ok(Vec::new()),
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                ExpenseError::CorruptData(format!("Failed to parse stored expenses: {}", e))
            }),
        }
    }

    fn store(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        let json = serde_json::to_string(expenses)?;
        self.provider.set(EXPENSES_KEY, &json)
    }
}
