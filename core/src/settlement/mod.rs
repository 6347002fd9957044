//! Settlement Module
//!
//! The core settlement computation: given a snapshot of members and
//! expenses, derive each member's net balance and a greedy
//! largest-debtor/largest-creditor sequence of transfers that discharges
//! every imbalance.
//!
//! # Critical Invariants
//!
//! 1. **Totality**: `compute` never fails; dangling member references
//!    contribute nothing instead of erroring
//! 2. **Conservation**: when every reference is known, balances sum to zero
//!    up to floating-point rounding
//! 3. **Full discharge**: after matching, every debtor's and creditor's
//!    rounded magnitude is at or below the 0.01 epsilon
//! 4. **Termination**: at most `|debtors| + |creditors| - 1` transfers
//!
//! # Example
//!
//! ```rust
//! use trip_split_core_rs::{settlement, Expense, Member};
//!
//! let alice = Member::new("Alice".to_string());
//! let bob = Member::new("Bob".to_string());
//! let dinner = Expense::new(
//!     alice.id().to_string(),
//!     100.0,
//!     "Dinner".to_string(),
//!     vec![alice.id().to_string(), bob.id().to_string()],
//! )
//! .unwrap();
//!
//! let report = settlement::compute(&[alice.clone(), bob], &[dinner]);
//! assert_eq!(report.transactions.len(), 1);
//! assert_eq!(report.transactions[0].from, "Bob");
//! assert_eq!(report.transactions[0].to, "Alice");
//! assert_eq!(report.transactions[0].amount, 50.0);
//! assert_eq!(report.balance_of(alice.id()), 50.0);
//! ```

pub mod engine;

// Re-export public API
pub use engine::{compute, round_to_cents, SETTLEMENT_EPSILON};
