//! Error types for the memberships adapter

use crate::domain::DestinationType;
use adapter_core::AdapterError;
use thiserror::Error;

/// Errors that can occur while reading or maintaining rosters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MembershipsError {
    /// The capability was called on an adapter that never overrode it.
    #[error("{method} must be defined in {contract}")]
    NotImplemented {
        method: &'static str,
        contract: &'static str,
    },

    #[error("Invalid destination ID: {0:?}")]
    InvalidDestination(String),

    #[error("Destination not found: {destination_type} {id}")]
    DestinationNotFound {
        id: String,
        destination_type: DestinationType,
    },

    #[error("Destination already exists: {destination_type} {id}")]
    DestinationExists {
        id: String,
        destination_type: DestinationType,
    },

    #[error("Duplicate member ID in roster: {0}")]
    DuplicateMember(String),

    #[error("Unknown destination type: {0:?}")]
    UnknownDestinationType(String),

    #[error("Too many members: {count} > {max}")]
    RosterFull { count: usize, max: usize },

    #[error("Too many destinations: {count} > {max}")]
    TooManyDestinations { count: usize, max: usize },

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Adapter error: {0}")]
    Adapter(#[from] AdapterError),
}

impl MembershipsError {
    /// The guard raised by the `MembershipsAdapter` contract for a method
    /// the concrete adapter did not supply.
    #[must_use]
    pub fn not_implemented(method: &'static str) -> Self {
        Self::NotImplemented {
            method,
            contract: "MembershipsAdapter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_message() {
        let err = MembershipsError::not_implemented("getMembers()");
        assert_eq!(err.to_string(), "getMembers() must be defined in MembershipsAdapter");
    }

    #[test]
    fn test_not_found_message() {
        let err = MembershipsError::DestinationNotFound {
            id: "room-1".to_string(),
            destination_type: DestinationType::Room,
        };
        assert_eq!(err.to_string(), "Destination not found: room room-1");
    }

    #[test]
    fn test_from_adapter_error() {
        let err: MembershipsError = AdapterError::Config("bad".to_string()).into();
        assert!(matches!(err, MembershipsError::Adapter(AdapterError::Config(_))));
    }
}
