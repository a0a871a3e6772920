//! # Adapter Trait - Pluggable Data Access
//!
//! Defines the base contract that every data adapter implements. Family
//! specific contracts (memberships, rooms, ...) extend [`Adapter`] with
//! their own capabilities.
//!
//! ## Example Implementation
//!
//! ```rust,ignore
//! use adapter_core::{Adapter, AdapterKind};
//!
//! pub struct MyAdapter;
//!
//! impl Adapter for MyAdapter {
//!     fn name(&self) -> &str { "my-adapter" }
//!     fn kind(&self) -> AdapterKind { AdapterKind::Memberships }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Families of adapters a component set can consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdapterKind {
    /// Roster data for rooms and meetings.
    Memberships,
    /// Room metadata.
    Rooms,
    /// User profiles and presence.
    Users,
    /// Activity (message) data.
    Activities,
    /// Meeting controls and state.
    Meetings,
}

impl AdapterKind {
    /// Stable string identifier of the family.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memberships => "memberships",
            Self::Rooms => "rooms",
            Self::Users => "users",
            Self::Activities => "activities",
            Self::Meetings => "meetings",
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata about an adapter for discovery and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterInfo {
    /// Registered name.
    pub name: String,
    /// Adapter family.
    pub kind: AdapterKind,
    /// Version string.
    pub version: String,
    /// Brief description of the backing data source.
    pub description: String,
}

impl AdapterInfo {
    /// Create adapter info with the required fields.
    pub fn new(name: impl Into<String>, kind: AdapterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// The base trait all data adapters implement.
pub trait Adapter: Send + Sync {
    /// Name under which the adapter is registered.
    fn name(&self) -> &str;

    /// Family this adapter belongs to.
    fn kind(&self) -> AdapterKind;

    /// Detailed information about this adapter.
    fn info(&self) -> AdapterInfo {
        AdapterInfo::new(self.name(), self.kind())
    }
}

/// A type-erased, shareable adapter handle for the registry.
pub type DynAdapter = Arc<dyn Adapter>;

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedAdapter;

    impl Adapter for NamedAdapter {
        fn name(&self) -> &str {
            "named"
        }

        fn kind(&self) -> AdapterKind {
            AdapterKind::Rooms
        }
    }

    #[test]
    fn test_default_info() {
        let info = NamedAdapter.info();
        assert_eq!(info.name, "named");
        assert_eq!(info.kind, AdapterKind::Rooms);
        assert!(info.description.is_empty());
    }

    #[test]
    fn test_info_builder() {
        let info = AdapterInfo::new("json", AdapterKind::Memberships)
            .with_description("Static roster fixtures");
        assert_eq!(info.description, "Static roster fixtures");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AdapterKind::Memberships).unwrap();
        assert_eq!(json, "\"memberships\"");
        assert_eq!(AdapterKind::Meetings.to_string(), "meetings");
    }
}
