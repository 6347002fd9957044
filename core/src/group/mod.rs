//! Group façade
//!
//! The stateful shell around the pure settlement engine: owns the roster,
//! the ledger, the event log, and the memoized report. The write path lives
//! here. Validation and referential integrity are enforced before data ever
//! reaches a store, so the engine downstream never has to re-validate.
//!
//! # Critical Invariants
//!
//! 1. **Referential integrity**: a member cannot be removed while any
//!    expense names them as payer or sharer
//! 2. **Validated writes**: every stored expense has a positive amount, a
//!    non-empty description, and at least one known participant
//! 3. **Snapshot recomputation**: `report` always reflects the complete
//!    current roster and ledger; the cache only skips work when the
//!    snapshot hash is unchanged

pub mod cache;

pub use cache::ReportCache;

use crate::events::{EventLog, GroupEvent};
use crate::models::expense::{Expense, ExpenseError};
use crate::models::member::Member;
use crate::models::report::SettlementReport;
use crate::settlement;
use crate::store::ledger::{Ledger, LedgerError};
use crate::store::roster::{Roster, RosterError};
use thiserror::Error;

/// Errors that can occur on the group write path
#[derive(Debug, Error, PartialEq)]
pub enum GroupError {
    #[error("member name must not be empty")]
    EmptyMemberName,

    #[error("member {id} not found")]
    MemberNotFound { id: String },

    #[error("member {id} is still referenced by {count} expense(s)")]
    MemberHasExpenses { id: String, count: usize },

    #[error("payer {id} is not a member of this group")]
    UnknownPayer { id: String },

    #[error("participant {id} is not a member of this group")]
    UnknownParticipant { id: String },

    #[error("expense {id} not found")]
    ExpenseNotFound { id: String },

    #[error(transparent)]
    InvalidExpense(#[from] ExpenseError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// One trip's members, expenses, and settlement view
///
/// # Example
/// ```
/// use trip_split_core_rs::Group;
///
/// let mut group = Group::new();
/// let alice = group.add_member("Alice").unwrap();
/// let bob = group.add_member("Bob").unwrap();
///
/// group
///     .add_expense(
///         alice.id().to_string(),
///         100.0,
///         "Dinner".to_string(),
///         vec![alice.id().to_string(), bob.id().to_string()],
///     )
///     .unwrap();
///
/// let report = group.report();
/// assert_eq!(report.transactions.len(), 1);
/// assert_eq!(report.transactions[0].from, "Bob");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Group {
    roster: Roster,
    ledger: Ledger,
    events: EventLog,
    cache: ReportCache,
}

impl Group {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a group from stored roster and ledger snapshots
    ///
    /// Rehydration emits no events and starts with a cold report cache.
    pub fn from_stores(roster: Roster, ledger: Ledger) -> Self {
        Self {
            roster,
            ledger,
            events: EventLog::new(),
            cache: ReportCache::new(),
        }
    }

    // ------------------------------------------------------------------
    // Write path
    // ------------------------------------------------------------------

    /// Add a member by name
    ///
    /// The name is trimmed; an empty result is rejected. Returns the
    /// created member (id and timestamp assigned here).
    pub fn add_member(&mut self, name: &str) -> Result<Member, GroupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GroupError::EmptyMemberName);
        }

        let member = Member::new(name.to_string());
        self.roster.add(member.clone())?;
        self.events.push(GroupEvent::MemberAdded {
            member_id: member.id().to_string(),
            name: member.name().to_string(),
        });
        Ok(member)
    }

    /// Remove a member, refusing while expenses still reference them
    pub fn remove_member(&mut self, id: &str) -> Result<Member, GroupError> {
        if !self.roster.contains(id) {
            return Err(GroupError::MemberNotFound { id: id.to_string() });
        }

        let count = self.ledger.references(id);
        if count > 0 {
            return Err(GroupError::MemberHasExpenses {
                id: id.to_string(),
                count,
            });
        }

        let member = self
            .roster
            .remove(id)
            .ok_or_else(|| GroupError::MemberNotFound { id: id.to_string() })?;
        self.events.push(GroupEvent::MemberRemoved {
            member_id: member.id().to_string(),
        });
        Ok(member)
    }

    /// Record an expense
    ///
    /// The payer and every participant must be current members; amount and
    /// description rules are enforced by [`Expense::new`]. Returns the
    /// created expense.
    pub fn add_expense(
        &mut self,
        payer_id: String,
        amount: f64,
        description: String,
        involved_ids: Vec<String>,
    ) -> Result<Expense, GroupError> {
        if !self.roster.contains(&payer_id) {
            return Err(GroupError::UnknownPayer { id: payer_id });
        }
        for id in &involved_ids {
            if !self.roster.contains(id) {
                return Err(GroupError::UnknownParticipant { id: id.clone() });
            }
        }

        let expense = Expense::new(payer_id, amount, description, involved_ids)?;
        self.ledger.add(expense.clone())?;
        self.events.push(GroupEvent::ExpenseAdded {
            expense_id: expense.id().to_string(),
            payer_id: expense.payer_id().to_string(),
            amount: expense.amount(),
        });
        Ok(expense)
    }

    /// Delete an expense
    pub fn remove_expense(&mut self, id: &str) -> Result<Expense, GroupError> {
        let expense = self
            .ledger
            .remove(id)
            .ok_or_else(|| GroupError::ExpenseNotFound { id: id.to_string() })?;
        self.events.push(GroupEvent::ExpenseRemoved {
            expense_id: expense.id().to_string(),
        });
        Ok(expense)
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// Members ordered by creation time
    pub fn members(&self) -> &[Member] {
        self.roster.members()
    }

    /// Expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    /// Expenses newest first
    pub fn recent_expenses(&self) -> Vec<&Expense> {
        self.ledger.recent()
    }

    /// Display name for a member id, if the member is still present
    pub fn member_name(&self, id: &str) -> Option<&str> {
        self.roster.get(id).map(|m| m.name())
    }

    /// Sum of all expense amounts
    pub fn total_spent(&self) -> f64 {
        self.ledger.total_spent()
    }

    /// Number of recorded expenses
    pub fn expense_count(&self) -> usize {
        self.ledger.len()
    }

    /// Number of members
    pub fn member_count(&self) -> usize {
        self.roster.len()
    }

    /// The change log
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// The underlying roster store
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The underlying ledger store
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ------------------------------------------------------------------
    // Settlement
    // ------------------------------------------------------------------

    /// Settlement report over the current snapshot
    ///
    /// Recomputes whenever the snapshot changed since the last call; an
    /// unchanged snapshot returns the memoized report.
    pub fn report(&mut self) -> &SettlementReport {
        self.cache
            .get_or_compute(self.roster.members(), self.ledger.expenses())
    }

    /// Settlement report computed fresh, bypassing the cache
    ///
    /// Useful when only a shared reference is available; always invokes the
    /// engine.
    pub fn compute_report(&self) -> SettlementReport {
        settlement::compute(self.roster.members(), self.ledger.expenses())
    }
}
