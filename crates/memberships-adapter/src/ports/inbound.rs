//! Inbound Port (Driving Port)
//!
//! The capability set every memberships adapter must supply. Adapters
//! implement [`MembershipsAdapter`] and override each method, adhering to
//! the exact parameters and structure of the returned snapshots.

use adapter_core::Adapter;
use std::sync::Arc;
use tracing::warn;

use crate::domain::DestinationType;
use crate::error::MembershipsError;
use crate::stream::MembershipStream;

/// Signature named by the unimplemented guard of
/// [`MembershipsAdapter::get_members_from_destination`].
pub const GET_MEMBERS_FROM_DESTINATION: &str =
    "getMembersFromDestination(destinationID, destinationType)";

/// Maps membership data from a data source into [`Membership`] snapshots.
///
/// [`Membership`]: crate::domain::Membership
pub trait MembershipsAdapter: Adapter {
    /// Returns a stream of `Membership` snapshots for a destination.
    ///
    /// Whenever the roster of the destination changes, the stream emits a
    /// new, complete snapshot, as far as the data source can observe.
    ///
    /// # Arguments
    ///
    /// * `destination_id` - ID of the destination for which to get members
    /// * `destination_type` - Type of the membership destination
    ///
    /// # Default
    ///
    /// Adapters that do not override this method return a stream whose
    /// sole event is [`MembershipsError::NotImplemented`].
    fn get_members_from_destination(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
    ) -> MembershipStream {
        warn!(
            adapter = %self.name(),
            destination_id,
            destination_type = %destination_type,
            "get_members_from_destination is not implemented by this adapter"
        );
        MembershipStream::failed(MembershipsError::not_implemented(
            GET_MEMBERS_FROM_DESTINATION,
        ))
    }
}

/// A shareable, type-erased memberships adapter.
pub type DynMembershipsAdapter = Arc<dyn MembershipsAdapter>;
