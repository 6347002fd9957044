//! Member model
//!
//! Represents a participant in the trip roster.
//! Each member has:
//! - Stable unique identifier (UUID v4 string)
//! - Display name (used to label transfers in the settlement report)
//! - Optional creation timestamp (the roster ordering key)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trip member who can pay for or share in expenses
///
/// # Example
/// ```
/// use trip_split_core_rs::Member;
///
/// let alice = Member::new("Alice".to_string());
/// assert_eq!(alice.name(), "Alice");
/// assert!(alice.created_at().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier (UUID)
    id: String,

    /// Display name
    name: String,

    /// Creation timestamp; `None` sorts before any timestamped member
    created_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Create a new member with a fresh id and the current timestamp
    pub fn new(name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            created_at: Some(Utc::now()),
        }
    }

    /// Restore a member verbatim (for collaborators rehydrating a stored roster)
    ///
    /// No validation is performed; the caller owns the integrity of the
    /// restored data.
    pub fn from_parts(id: String, name: String, created_at: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    /// Get member ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get creation timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
