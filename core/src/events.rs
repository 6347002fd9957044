//! Group change events
//!
//! Every successful mutation of a group appends one event here. The log is
//! the crate's observability surface: a collaborator can render an activity
//! feed from it, or replay it against another store.
//!
//! # Design Principles
//!
//! 1. **Self-contained**: each event carries all data needed to describe it
//! 2. **Serializable**: events cross the collaborator boundary as plain data
//! 3. **Append-only**: the core never rewrites history; `clear` exists for
//!    collaborators that ship the log elsewhere

use serde::{Deserialize, Serialize};

/// A recorded mutation of the roster or ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GroupEvent {
    /// A member joined the roster
    MemberAdded { member_id: String, name: String },

    /// A member left the roster (only possible while unreferenced)
    MemberRemoved { member_id: String },

    /// An expense was recorded
    ExpenseAdded {
        expense_id: String,
        payer_id: String,
        amount: f64,
    },

    /// An expense was deleted
    ExpenseRemoved { expense_id: String },
}

/// Append-only log of group mutations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GroupEvent>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event
    pub fn push(&mut self, event: GroupEvent) {
        self.events.push(event);
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event, if any
    pub fn last(&self) -> Option<&GroupEvent> {
        self.events.last()
    }

    /// Iterate events oldest first
    pub fn iter(&self) -> impl Iterator<Item = &GroupEvent> {
        self.events.iter()
    }

    /// Drop all recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
