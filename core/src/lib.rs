//! Trip Split Core - Settlement Engine
//!
//! Shared expense tracking core: a roster of trip members, a ledger of
//! cost-sharing expenses, and a settlement engine that computes net balances
//! and a greedy debtor/creditor transfer plan.
//!
//! # Architecture
//!
//! - **models**: Domain types (Member, Expense, Transfer, SettlementReport)
//! - **store**: In-memory roster and ledger collections
//! - **settlement**: The pure settlement engine
//! - **group**: Stateful façade (write-path validation, referential
//!   integrity, memoized recomputation)
//! - **events**: Append-only change log for collaborators
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 in the ledger's currency unit; residuals are
//!    compared against the 0.01 settlement epsilon, never for exact equality
//! 2. The settlement engine is a total function: it never fails, and it
//!    degrades silently on dangling member references
//! 3. Recomputation always runs over the complete current snapshot; caching
//!    is an optimization, never a correctness mechanism

// Module declarations
pub mod events;
pub mod group;
pub mod models;
pub mod settlement;
pub mod store;

// Re-exports for convenience
pub use events::{EventLog, GroupEvent};
pub use group::{Group, GroupError, ReportCache};
pub use models::{
    expense::{Expense, ExpenseError},
    member::Member,
    report::{SettlementReport, Transfer},
};
pub use settlement::{compute, round_to_cents, SETTLEMENT_EPSILON};
pub use store::{
    ledger::{Ledger, LedgerError},
    roster::{Roster, RosterError},
};
