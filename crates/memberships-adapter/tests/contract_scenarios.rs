//! # Contract Scenarios for the Memberships Adapter
//!
//! Exercises the `MembershipsAdapter` contract from the outside, the way a
//! UI component would consume it.
//!
//! ## Test Categories
//!
//! 1. **Unimplemented Guard** - Bare contract fails on the stream
//! 2. **Minimal Override** - A custom adapter emits the declared shape
//! 3. **Registry Wiring** - Adapters plug into the shared registry

use adapter_core::{Adapter, AdapterKind, AdapterRegistry};
use futures::StreamExt;
use memberships_adapter::{
    telemetry_from_env, BaseMembershipsAdapter, DestinationType, DynMembershipsAdapter,
    InMemoryMembershipsAdapter, Member, Membership, MembershipStream, MembershipsAdapter,
    MembershipsError,
};
use std::sync::Arc;

const NOT_IMPLEMENTED_MESSAGE: &str =
    "getMembersFromDestination(destinationID, destinationType) must be defined in MembershipsAdapter";

// =============================================================================
// TEST HELPERS
// =============================================================================

/// Overrides the capability with a single empty roster.
struct SingleSnapshotAdapter;

impl Adapter for SingleSnapshotAdapter {
    fn name(&self) -> &str {
        "single-snapshot"
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::Memberships
    }
}

impl MembershipsAdapter for SingleSnapshotAdapter {
    fn get_members_from_destination(
        &self,
        destination_id: &str,
        destination_type: DestinationType,
    ) -> MembershipStream {
        MembershipStream::from_snapshots(vec![Membership::new(
            format!("membership-{destination_id}"),
            destination_id,
            destination_type,
        )])
    }
}

/// Only names itself; inherits the unimplemented guard.
struct ForgetfulAdapter;

impl Adapter for ForgetfulAdapter {
    fn name(&self) -> &str {
        "forgetful"
    }

    fn kind(&self) -> AdapterKind {
        AdapterKind::Memberships
    }
}

impl MembershipsAdapter for ForgetfulAdapter {}

async fn collect_events(
    adapter: &dyn MembershipsAdapter,
    destination_id: &str,
    destination_type: DestinationType,
) -> Vec<Result<Membership, MembershipsError>> {
    adapter
        .get_members_from_destination(destination_id, destination_type)
        .collect()
        .await
}

// =============================================================================
// UNIMPLEMENTED GUARD
// =============================================================================

#[tokio::test]
async fn base_adapter_room_yields_single_error() {
    let adapter = BaseMembershipsAdapter::default();
    let events = collect_events(&adapter, "room-42", DestinationType::Room).await;

    assert_eq!(events.len(), 1);
    let err = events[0].as_ref().unwrap_err();
    assert_eq!(err.to_string(), NOT_IMPLEMENTED_MESSAGE);
}

#[tokio::test]
async fn base_adapter_meeting_yields_identical_error() {
    let adapter = BaseMembershipsAdapter::default();
    let room = collect_events(&adapter, "room-42", DestinationType::Room).await;
    let meeting = collect_events(&adapter, "room-42", DestinationType::Meeting).await;

    assert_eq!(room, meeting);
    assert_eq!(
        meeting[0].as_ref().unwrap_err().to_string(),
        NOT_IMPLEMENTED_MESSAGE
    );
}

#[tokio::test]
async fn subclass_without_override_inherits_guard() {
    let events = collect_events(&ForgetfulAdapter, "meeting-9", DestinationType::Meeting).await;

    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Err(MembershipsError::NotImplemented { .. })
    ));
}

#[test]
fn guard_error_is_not_raised_eagerly() {
    let adapter = BaseMembershipsAdapter::default();
    let stream = adapter.get_members_from_destination("room-42", DestinationType::Room);

    // Nothing has been observed until the stream is polled.
    assert!(!stream.is_finished());
    stream.unsubscribe();
}

// =============================================================================
// MINIMAL OVERRIDE
// =============================================================================

#[tokio::test]
async fn override_emits_single_empty_membership() {
    let events = collect_events(&SingleSnapshotAdapter, "room-42", DestinationType::Room).await;

    assert_eq!(
        events,
        vec![Ok(Membership::new(
            "membership-room-42",
            "room-42",
            DestinationType::Room
        ))]
    );
}

#[tokio::test]
async fn override_output_has_normalized_shape() {
    let events = collect_events(&SingleSnapshotAdapter, "meeting-1", DestinationType::Meeting).await;
    let membership = events.into_iter().next().unwrap().unwrap();
    let json = serde_json::to_value(&membership).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "ID": "membership-meeting-1",
            "destinationID": "meeting-1",
            "destinationType": "meeting",
            "members": []
        })
    );
}

#[tokio::test]
async fn in_memory_adapter_through_trait_object() {
    adapter_core::init_tracing_once(&telemetry_from_env().with_log_level("debug"))
        .expect("valid filter");

    let source = Arc::new(InMemoryMembershipsAdapter::new());
    source
        .set_membership(
            Membership::new("m-1", "meeting-7", DestinationType::Meeting).with_members(vec![
                Member::new("alice", "org-1").in_meeting(true),
                Member::new("bob", "org-1").sharing(true).in_meeting(true),
            ]),
        )
        .unwrap();

    let adapter: DynMembershipsAdapter = source.clone();
    let mut stream = adapter.get_members_from_destination("meeting-7", DestinationType::Meeting);

    let roster = stream.recv().await.unwrap().unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster.members.iter().all(|m| m.in_meeting));

    source
        .remove_member("meeting-7", DestinationType::Meeting, "bob")
        .unwrap();
    let roster = stream.recv().await.unwrap().unwrap();
    assert_eq!(roster.len(), 1);

    stream.unsubscribe();
    assert_eq!(
        source.subscriber_count("meeting-7", DestinationType::Meeting),
        0
    );
}

// =============================================================================
// REGISTRY WIRING
// =============================================================================

#[test]
fn adapters_register_by_name() {
    let mut registry = AdapterRegistry::new();
    registry.register(Arc::new(InMemoryMembershipsAdapter::new()));
    registry.register(Arc::new(BaseMembershipsAdapter::new("placeholder")));
    registry.register(Arc::new(SingleSnapshotAdapter));

    assert_eq!(
        registry.names(),
        vec!["in-memory-memberships", "placeholder", "single-snapshot"]
    );
    assert_eq!(registry.by_kind(AdapterKind::Memberships).len(), 3);
}
