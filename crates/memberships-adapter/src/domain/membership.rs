//! Membership roster snapshot

use super::{DestinationType, Member};
use serde::{Deserialize, Serialize};

/// The full roster of a destination at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// The membership identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// ID of the destination the roster belongs to
    #[serde(rename = "destinationID")]
    pub destination_id: String,
    /// Type of the membership destination
    #[serde(rename = "destinationType")]
    pub destination_type: DestinationType,
    /// Members, in source order
    pub members: Vec<Member>,
}

impl Membership {
    /// Create a membership with an empty roster.
    pub fn new(
        id: impl Into<String>,
        destination_id: impl Into<String>,
        destination_type: DestinationType,
    ) -> Self {
        Self {
            id: id.into(),
            destination_id: destination_id.into(),
            destination_type,
            members: Vec::new(),
        }
    }

    /// Replace the roster.
    #[must_use]
    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    /// Look up a member by ID.
    #[must_use]
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Number of members in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
