//! Settlement report types
//!
//! Plain data carriers describing the outcome of one settlement run.
//! Both are ephemeral: recomputed on every run, never stored by the core.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A suggested payment closing part or all of two parties' imbalance
///
/// Transfers are labeled with member display names, matching what the
/// presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// Name of the member who pays
    pub from: String,

    /// Name of the member who receives
    pub to: String,

    /// Transfer amount (positive)
    pub amount: f64,
}

/// Result of one settlement computation
///
/// `transactions` is ordered by emission; `balances` carries the raw,
/// pre-rounding net amount per member id (positive = owed money, negative =
/// owes money) for display formatting by the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Suggested transfers, in emission order
    pub transactions: Vec<Transfer>,

    /// Raw net balance per member id
    pub balances: HashMap<String, f64>,
}

impl SettlementReport {
    /// Whether the group is already balanced (no transfers needed)
    pub fn is_settled(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Raw balance for a member, 0 if the id is unknown
    pub fn balance_of(&self, member_id: &str) -> f64 {
        self.balances.get(member_id).copied().unwrap_or(0.0)
    }

    /// Sum of all suggested transfer amounts
    pub fn total_transferred(&self) -> f64 {
        self.transactions.iter().map(|t| t.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_settled() {
        let report = SettlementReport::default();

        assert!(report.is_settled());
        assert_eq!(report.total_transferred(), 0.0);
    }

    #[test]
    fn test_balance_of_unknown_member_is_zero() {
        let mut report = SettlementReport::default();
        report.balances.insert("alice".to_string(), 12.5);

        assert_eq!(report.balance_of("alice"), 12.5);
        assert_eq!(report.balance_of("ghost"), 0.0);
    }

    #[test]
    fn test_total_transferred_sums_transactions() {
        let report = SettlementReport {
            transactions: vec![
                Transfer {
                    from: "Bob".to_string(),
                    to: "Alice".to_string(),
                    amount: 30.0,
                },
                Transfer {
                    from: "Carol".to_string(),
                    to: "Alice".to_string(),
                    amount: 20.0,
                },
            ],
            balances: HashMap::new(),
        };

        assert_eq!(report.total_transferred(), 50.0);
    }
}
