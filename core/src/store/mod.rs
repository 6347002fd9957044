//! In-memory stores
//!
//! The roster (members) and ledger (expenses) the settlement engine reads
//! its snapshots from. Both are plain owned collections: no I/O, no
//! persistence mechanics. A surrounding application that syncs with a
//! document store rebuilds these from its own subscription and hands slices
//! to the engine.
//!
//! Referential integrity between the two (a member must not be removable
//! while expenses reference it) is enforced one level up, by
//! [`crate::group::Group`], since neither store knows about the other.

pub mod ledger;
pub mod roster;

// Re-exports
pub use ledger::{Ledger, LedgerError};
pub use roster::{Roster, RosterError};
