//! Ledger store
//!
//! In-memory collection of expenses, kept in insertion order. Insertion
//! order is the snapshot ordering the engine consumes; `recent()` gives the
//! newest-first ordering list views use.

use crate::models::expense::Expense;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during ledger operations
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("expense id {id} already exists in the ledger")]
    DuplicateExpense { id: String },
}

/// The current set of recorded expenses
///
/// # Example
/// ```
/// use trip_split_core_rs::{Expense, Ledger};
///
/// let mut ledger = Ledger::new();
/// let dinner = Expense::new(
///     "alice".to_string(),
///     120.0,
///     "Dinner".to_string(),
///     vec!["alice".to_string(), "bob".to_string()],
/// )
/// .unwrap();
/// ledger.add(dinner).unwrap();
///
/// assert_eq!(ledger.total_spent(), 120.0);
/// assert_eq!(ledger.references("bob"), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Expenses in insertion order
    expenses: Vec<Expense>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expense
    ///
    /// Rejects an expense whose id is already present.
    pub fn add(&mut self, expense: Expense) -> Result<(), LedgerError> {
        if self.get(expense.id()).is_some() {
            return Err(LedgerError::DuplicateExpense {
                id: expense.id().to_string(),
            });
        }
        self.expenses.push(expense);
        Ok(())
    }

    /// Remove an expense by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Expense> {
        let at = self.expenses.iter().position(|e| e.id() == id)?;
        Some(self.expenses.remove(at))
    }

    /// Get an expense by id
    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id() == id)
    }

    /// Expenses in insertion order (the engine's snapshot ordering)
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses newest first (list-view ordering)
    ///
    /// Expenses without a timestamp sort last. Ties keep insertion order.
    pub fn recent(&self) -> Vec<&Expense> {
        let mut view: Vec<&Expense> = self.expenses.iter().collect();
        view.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        view
    }

    /// Number of expenses naming the member as payer or sharer
    pub fn references(&self, member_id: &str) -> usize {
        self.expenses
            .iter()
            .filter(|e| e.references(member_id))
            .count()
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount()).sum()
    }

    /// Number of expenses
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the ledger is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
