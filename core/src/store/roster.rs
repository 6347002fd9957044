//! Roster store
//!
//! Ordered, in-memory collection of trip members. Kept sorted ascending by
//! creation timestamp (members without one sort first), with insertion order
//! preserved on ties. This ordering is the engine's member iteration order,
//! so it also decides tie-breaks between equal balances in the matching
//! phase.

use crate::models::member::Member;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during roster operations
#[derive(Debug, Error, PartialEq)]
pub enum RosterError {
    #[error("member id {id} already exists in the roster")]
    DuplicateMember { id: String },
}

/// The current set of trip members
///
/// # Example
/// ```
/// use trip_split_core_rs::{Member, Roster};
///
/// let mut roster = Roster::new();
/// roster.add(Member::new("Alice".to_string())).unwrap();
/// roster.add(Member::new("Bob".to_string())).unwrap();
///
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.members()[0].name(), "Alice");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Members sorted ascending by `created_at`
    members: Vec<Member>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member, keeping the roster ordered
    ///
    /// Rejects a member whose id is already present.
    pub fn add(&mut self, member: Member) -> Result<(), RosterError> {
        if self.contains(member.id()) {
            return Err(RosterError::DuplicateMember {
                id: member.id().to_string(),
            });
        }

        // Equal timestamps keep insertion order: the new member goes after
        // every existing member that does not sort strictly later.
        let at = self
            .members
            .partition_point(|m| m.created_at() <= member.created_at());
        self.members.insert(at, member);
        Ok(())
    }

    /// Remove a member by id, returning it if present
    pub fn remove(&mut self, id: &str) -> Option<Member> {
        let at = self.members.iter().position(|m| m.id() == id)?;
        Some(self.members.remove(at))
    }

    /// Get a member by id
    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == id)
    }

    /// Whether a member id is present
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Ordered view of all members (the engine's iteration order)
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn member_at(id: &str, name: &str, secs: i64) -> Member {
        Member::from_parts(
            id.to_string(),
            name.to_string(),
            Some(Utc.timestamp_opt(secs, 0).unwrap()),
        )
    }

    #[test]
    fn test_add_keeps_created_at_order() {
        let mut roster = Roster::new();
        roster.add(member_at("m2", "Bob", 200)).unwrap();
        roster.add(member_at("m1", "Alice", 100)).unwrap();
        roster.add(member_at("m3", "Carol", 300)).unwrap();

        let names: Vec<&str> = roster.members().iter().map(|m| m.name()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_member_without_timestamp_sorts_first() {
        let mut roster = Roster::new();
        roster.add(member_at("m1", "Alice", 100)).unwrap();
        roster
            .add(Member::from_parts("m0".to_string(), "Zed".to_string(), None))
            .unwrap();

        assert_eq!(roster.members()[0].name(), "Zed");
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let mut roster = Roster::new();
        roster.add(member_at("m1", "Alice", 100)).unwrap();
        roster.add(member_at("m2", "Bob", 100)).unwrap();
        roster.add(member_at("m3", "Carol", 100)).unwrap();

        let ids: Vec<&str> = roster.members().iter().map(|m| m.id()).collect();
        assert_eq!(ids, ["m1", "m2", "m3"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut roster = Roster::new();
        roster.add(member_at("m1", "Alice", 100)).unwrap();

        let result = roster.add(member_at("m1", "Imposter", 200));
        assert_eq!(
            result,
            Err(RosterError::DuplicateMember {
                id: "m1".to_string()
            })
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove_returns_member() {
        let mut roster = Roster::new();
        roster.add(member_at("m1", "Alice", 100)).unwrap();

        let removed = roster.remove("m1").unwrap();
        assert_eq!(removed.name(), "Alice");
        assert!(roster.is_empty());
        assert!(roster.remove("m1").is_none());
    }
}
