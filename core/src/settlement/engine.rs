//! Settlement engine
//!
//! Pure function over an in-memory snapshot: no I/O, no side effects,
//! deterministic for a given input ordering, and safe to call concurrently
//! with independent snapshots.
//!
//! The computation runs in three steps:
//! 1. Accumulate raw balances: credit each payer, debit each sharer by an
//!    equal share
//! 2. Round to cents and partition members into debtors and creditors
//!    against the 0.01 epsilon
//! 3. Greedily match the largest debtor against the largest creditor until
//!    one side is exhausted
//!
//! Documented edge cases (degrade silently, never error):
//! - Payer id not in the member set: the paid amount is dropped from the
//!   payer side
//! - Involved id not in the member set: that share is skipped
//! - Empty involved set: no deduction anywhere; the paid amount stays with
//!   the payer as credit

use crate::models::expense::Expense;
use crate::models::member::Member;
use crate::models::report::{SettlementReport, Transfer};
use std::collections::HashMap;

/// Tolerance below which a residual balance counts as settled.
///
/// Currency amounts are plain f64, so rounding noise is expected; every
/// comparison in the matching phase goes through this epsilon rather than
/// exact equality.
pub const SETTLEMENT_EPSILON: f64 = 0.01;

/// Round a currency amount to whole cents
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// One member's open position awaiting matching
#[derive(Debug, Clone)]
struct OpenPosition {
    /// Display name, copied into emitted transfers
    name: String,

    /// Positive magnitude still owed (debtor) or owed to (creditor)
    amount: f64,
}

/// Compute the settlement report for a snapshot of members and expenses
///
/// Input ordering matters only for tie-breaks: members with equal rounded
/// balances are matched in member iteration order. Expenses may arrive in
/// any order.
pub fn compute(members: &[Member], expenses: &[Expense]) -> SettlementReport {
    let balances = accumulate_balances(members, expenses);
    let (mut debtors, mut creditors) = partition(members, &balances);
    let transactions = match_positions(&mut debtors, &mut creditors);

    SettlementReport {
        transactions,
        balances,
    }
}

/// Step 1: raw balance per member id
///
/// Commutative over expenses up to floating-point associativity.
fn accumulate_balances(members: &[Member], expenses: &[Expense]) -> HashMap<String, f64> {
    let mut balances: HashMap<String, f64> = members
        .iter()
        .map(|member| (member.id().to_string(), 0.0))
        .collect();

    for expense in expenses {
        if let Some(balance) = balances.get_mut(expense.payer_id()) {
            *balance += expense.amount();
        }

        let involved = expense.involved_ids();
        if involved.is_empty() {
            // No deduction anywhere: the paid amount stays with the payer.
            continue;
        }

        let share = expense.amount() / involved.len() as f64;
        for member_id in involved {
            if let Some(balance) = balances.get_mut(member_id.as_str()) {
                *balance -= share;
            }
        }
    }

    balances
}

/// Step 2: classify members into debtors and creditors
///
/// Balances are rounded to cents first to suppress floating-point noise;
/// members whose rounded balance is within the epsilon are already settled
/// and excluded. Both lists come back sorted descending by magnitude; the
/// sort is stable, so equal magnitudes keep member iteration order.
fn partition(
    members: &[Member],
    balances: &HashMap<String, f64>,
) -> (Vec<OpenPosition>, Vec<OpenPosition>) {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for member in members {
        let rounded = round_to_cents(balances.get(member.id()).copied().unwrap_or(0.0));
        if rounded < -SETTLEMENT_EPSILON {
            debtors.push(OpenPosition {
                name: member.name().to_string(),
                amount: -rounded,
            });
        } else if rounded > SETTLEMENT_EPSILON {
            creditors.push(OpenPosition {
                name: member.name().to_string(),
                amount: rounded,
            });
        }
    }

    debtors.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    creditors.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    (debtors, creditors)
}

/// Step 3: greedy largest-vs-largest matching
///
/// Two pointers walk the sorted lists; each emitted transfer closes the
/// smaller of the two facing positions. A pointer advances once its
/// position's remainder drops below the epsilon, so every position is fully
/// discharged by the time it is passed. Terminates in at most
/// `debtors + creditors - 1` iterations.
fn match_positions(debtors: &mut [OpenPosition], creditors: &mut [OpenPosition]) -> Vec<Transfer> {
    let mut transactions = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].amount.min(creditors[j].amount);

        transactions.push(Transfer {
            from: debtors[i].name.clone(),
            to: creditors[j].name.clone(),
            amount,
        });

        debtors[i].amount -= amount;
        creditors[j].amount -= amount;

        if debtors[i].amount < SETTLEMENT_EPSILON {
            i += 1;
        }
        if creditors[j].amount < SETTLEMENT_EPSILON {
            j += 1;
        }
    }

    transactions
}
