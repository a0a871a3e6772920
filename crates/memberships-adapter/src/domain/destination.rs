//! Destination types

use crate::error::MembershipsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of entity a membership belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationType {
    /// A persistent room (space).
    Room,
    /// A meeting.
    Meeting,
}

impl DestinationType {
    /// Every destination type.
    pub const ALL: [Self; 2] = [Self::Room, Self::Meeting];

    /// Wire value of this destination type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Meeting => "meeting",
        }
    }
}

impl fmt::Display for DestinationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationType {
    type Err = MembershipsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room" => Ok(Self::Room),
            "meeting" => Ok(Self::Meeting),
            other => Err(MembershipsError::UnknownDestinationType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_two_values() {
        let values: Vec<&str> = DestinationType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(values, vec!["room", "meeting"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("room".parse::<DestinationType>().unwrap(), DestinationType::Room);
        assert_eq!(
            "meeting".parse::<DestinationType>().unwrap(),
            DestinationType::Meeting
        );
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for value in ["Room", "MEETING", "space", ""] {
            let err = value.parse::<DestinationType>().unwrap_err();
            assert_eq!(err, MembershipsError::UnknownDestinationType(value.to_string()));
        }
    }

    #[test]
    fn test_serde_values() {
        assert_eq!(
            serde_json::to_string(&DestinationType::Meeting).unwrap(),
            "\"meeting\""
        );
        let parsed: DestinationType = serde_json::from_str("\"room\"").unwrap();
        assert_eq!(parsed, DestinationType::Room);
        assert!(serde_json::from_str::<DestinationType>("\"team\"").is_err());
    }
}
