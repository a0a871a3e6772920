//! The bare contract as a concrete type.
//!
//! Overrides nothing, so every capability reports itself unimplemented.
//! Useful as a placeholder registration and for exercising the contract's
//! guard behavior.

use adapter_core::{Adapter, AdapterInfo, AdapterKind};

use crate::ports::MembershipsAdapter;

/// A memberships adapter with no data source.
#[derive(Debug, Clone)]
pub struct BaseMembershipsAdapter {
    name: String,
}

impl BaseMembershipsAdapter {
    /// Create an unbacked adapter with the given registry name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for BaseMembershipsAdapter {
    fn default() -> Self {
        Self::new("memberships")
    }
}

impl Adapter for BaseMembershipsAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::Memberships
    }

    fn info(&self) -> AdapterInfo {
        AdapterInfo::new(self.name(), self.kind()).with_description("No data source")
    }
}

impl MembershipsAdapter for BaseMembershipsAdapter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DestinationType;
    use crate::error::MembershipsError;
    use crate::ports::GET_MEMBERS_FROM_DESTINATION;

    #[tokio::test]
    async fn test_every_destination_type_fails() {
        let adapter = BaseMembershipsAdapter::default();

        for destination_type in DestinationType::ALL {
            let mut stream = adapter.get_members_from_destination("any", destination_type);
            let event = stream.recv().await;

            assert_eq!(
                event,
                Some(Err(MembershipsError::not_implemented(
                    GET_MEMBERS_FROM_DESTINATION
                )))
            );
            assert!(stream.recv().await.is_none());
        }
    }

    #[test]
    fn test_info() {
        let info = BaseMembershipsAdapter::new("placeholder").info();
        assert_eq!(info.name, "placeholder");
        assert_eq!(info.kind, AdapterKind::Memberships);
        assert_eq!(info.description, "No data source");
    }
}
