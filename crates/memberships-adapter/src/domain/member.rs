//! Member snapshot

use serde::{Deserialize, Serialize};

/// A single participant's status within a membership.
///
/// Serialized with the normalized field names UI components consume
/// (`ID`, `orgID`, `muted`, `sharing`, `inMeeting`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// The member identifier
    #[serde(rename = "ID")]
    pub id: String,
    /// The organization identifier
    #[serde(rename = "orgID")]
    pub org_id: String,
    /// If the member's audio is currently muted
    pub muted: bool,
    /// If the member is currently sharing their screen
    pub sharing: bool,
    /// If the member is currently in the meeting
    #[serde(rename = "inMeeting")]
    pub in_meeting: bool,
}

impl Member {
    /// Create a member with every status flag cleared.
    pub fn new(id: impl Into<String>, org_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            org_id: org_id.into(),
            muted: false,
            sharing: false,
            in_meeting: false,
        }
    }

    /// Builder-style method to set the muted flag
    #[must_use]
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Builder-style method to set the sharing flag
    #[must_use]
    pub fn sharing(mut self, sharing: bool) -> Self {
        self.sharing = sharing;
        self
    }

    /// Builder-style method to set the in-meeting flag
    #[must_use]
    pub fn in_meeting(mut self, in_meeting: bool) -> Self {
        self.in_meeting = in_meeting;
        self
    }
}
