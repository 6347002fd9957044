//! Expense model
//!
//! Represents a single payment by one member, shared among a subset of
//! members. Each expense has:
//! - Payer member id
//! - Amount (f64, currency units, must be positive)
//! - Description (trimmed, non-empty)
//! - Involved member ids (non-empty, duplicates collapsed to a single share)
//! - Optional creation timestamp (newest-first ordering key for list views)
//!
//! Expenses are immutable once created except for deletion. Validation
//! happens here, on the write path; the settlement engine never re-validates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing an expense
#[derive(Debug, Error, PartialEq)]
pub enum ExpenseError {
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount { amount: f64 },

    #[error("description must not be empty")]
    EmptyDescription,

    #[error("at least one member must share the expense")]
    NoParticipants,
}

/// A recorded cost-sharing payment
///
/// # Example
/// ```
/// use trip_split_core_rs::Expense;
///
/// let expense = Expense::new(
///     "alice".to_string(),
///     120.0,
///     "Dinner".to_string(),
///     vec!["alice".to_string(), "bob".to_string()],
/// )
/// .unwrap();
///
/// assert_eq!(expense.amount(), 120.0);
/// assert_eq!(expense.involved_ids().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier (UUID)
    id: String,

    /// Member id of whoever paid
    payer_id: String,

    /// Paid amount in the ledger's currency unit
    amount: f64,

    /// What the expense was for
    description: String,

    /// Member ids sharing the cost, first-occurrence order, no duplicates
    involved_ids: Vec<String>,

    /// Creation timestamp; `None` sorts after any timestamped expense in
    /// newest-first views
    created_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create a new validated expense with a fresh id and the current timestamp
    ///
    /// Validation rules:
    /// - `amount` must be strictly positive (NaN is rejected)
    /// - `description` must be non-empty after trimming
    /// - `involved_ids` must contain at least one id after duplicates are
    ///   collapsed; duplicate ids count as a single share
    pub fn new(
        payer_id: String,
        amount: f64,
        description: String,
        involved_ids: Vec<String>,
    ) -> Result<Self, ExpenseError> {
        if !(amount > 0.0) {
            return Err(ExpenseError::NonPositiveAmount { amount });
        }

        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(ExpenseError::EmptyDescription);
        }

        let involved_ids = dedup_preserving_order(involved_ids);
        if involved_ids.is_empty() {
            return Err(ExpenseError::NoParticipants);
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            payer_id,
            amount,
            description,
            involved_ids,
            created_at: Some(Utc::now()),
        })
    }

    /// Restore an expense verbatim (for collaborators rehydrating a stored ledger)
    ///
    /// No validation is performed, so this is the one path that can produce
    /// the documented edge cases the engine tolerates: a dangling payer or
    /// participant id, or an empty involved set.
    pub fn from_parts(
        id: String,
        payer_id: String,
        amount: f64,
        description: String,
        involved_ids: Vec<String>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            payer_id,
            amount,
            description,
            involved_ids,
            created_at,
        }
    }

    /// Get expense ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get payer member id
    pub fn payer_id(&self) -> &str {
        &self.payer_id
    }

    /// Get paid amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Get description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the ids sharing this expense
    pub fn involved_ids(&self) -> &[String] {
        &self.involved_ids
    }

    /// Get creation timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Whether the member appears as payer or sharer of this expense
    pub fn references(&self, member_id: &str) -> bool {
        self.payer_id == member_id || self.involved_ids.iter().any(|id| id == member_id)
    }
}

/// Drop repeated ids, keeping the first occurrence of each
fn dedup_preserving_order(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_new_validates_amount() {
        let result = Expense::new(
            "alice".to_string(),
            0.0,
            "Lunch".to_string(),
            participants(&["alice"]),
        );
        assert_eq!(result, Err(ExpenseError::NonPositiveAmount { amount: 0.0 }));

        let result = Expense::new(
            "alice".to_string(),
            -5.0,
            "Lunch".to_string(),
            participants(&["alice"]),
        );
        assert_eq!(result, Err(ExpenseError::NonPositiveAmount { amount: -5.0 }));
    }

    #[test]
    fn test_new_rejects_nan_amount() {
        let result = Expense::new(
            "alice".to_string(),
            f64::NAN,
            "Lunch".to_string(),
            participants(&["alice"]),
        );
        assert!(matches!(
            result,
            Err(ExpenseError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_new_trims_and_validates_description() {
        let result = Expense::new(
            "alice".to_string(),
            10.0,
            "   ".to_string(),
            participants(&["alice"]),
        );
        assert_eq!(result, Err(ExpenseError::EmptyDescription));

        let expense = Expense::new(
            "alice".to_string(),
            10.0,
            "  Taxi  ".to_string(),
            participants(&["alice"]),
        )
        .unwrap();
        assert_eq!(expense.description(), "Taxi");
    }

    #[test]
    fn test_new_requires_participants() {
        let result = Expense::new("alice".to_string(), 10.0, "Taxi".to_string(), vec![]);
        assert_eq!(result, Err(ExpenseError::NoParticipants));
    }

    #[test]
    fn test_duplicate_participants_collapse_to_one_share() {
        let expense = Expense::new(
            "alice".to_string(),
            10.0,
            "Taxi".to_string(),
            participants(&["alice", "bob", "alice", "bob"]),
        )
        .unwrap();

        let ids: Vec<&str> = expense.involved_ids().iter().map(|s| s.as_str()).collect();
        assert_eq!(ids, ["alice", "bob"]);
    }

    #[test]
    fn test_references_payer_and_sharers() {
        let expense = Expense::new(
            "alice".to_string(),
            10.0,
            "Taxi".to_string(),
            participants(&["bob"]),
        )
        .unwrap();

        assert!(expense.references("alice"));
        assert!(expense.references("bob"));
        assert!(!expense.references("carol"));
    }

    #[test]
    fn test_from_parts_skips_validation() {
        // The rehydration path may carry states the constructor refuses,
        // e.g. an empty involved set written by a concurrent editor.
        let expense = Expense::from_parts(
            "e1".to_string(),
            "alice".to_string(),
            10.0,
            "Taxi".to_string(),
            vec![],
            None,
        );

        assert!(expense.involved_ids().is_empty());
    }
}
