//! # Memberships Adapter
//!
//! Pluggable data-access layer that maps roster data from an external
//! source into the normalized `Membership` shape UI components consume.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure data, no I/O
//!   - `Member`: One participant's status flags
//!   - `Membership`: Full roster of a destination
//!   - `DestinationType`: `room` or `meeting`
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipsAdapter`: Driving port consumed by UI components
//!
//! - **Stream** (`stream`): `MembershipStream` subscription handle
//!
//! - **Adapters Layer** (`adapters/`): Concrete data sources
//!   - `BaseMembershipsAdapter`: Bare contract
//!   - `InMemoryMembershipsAdapter`: Process-local roster table
//!
//! ## Contract
//!
//! An adapter that does not override `get_members_from_destination` returns
//! a stream whose sole event is `MembershipsError::NotImplemented`. The error
//! travels on the stream, so callers observe it by polling, never as an
//! eager return value.
//!
//! ## Usage Example
//!
//! ```ignore
//! use memberships_adapter::{
//!     DestinationType, InMemoryMembershipsAdapter, Member, Membership, MembershipsAdapter,
//! };
//!
//! let adapter = InMemoryMembershipsAdapter::new();
//! adapter.set_membership(
//!     Membership::new("m-1", "room-42", DestinationType::Room)
//!         .with_members(vec![Member::new("alice", "org-1")]),
//! )?;
//!
//! let mut stream = adapter.get_members_from_destination("room-42", DestinationType::Room);
//! while let Some(Ok(roster)) = stream.recv().await {
//!     render(&roster);
//! }
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod stream;

// Re-exports for convenience
pub use adapters::{BaseMembershipsAdapter, InMemoryMembershipsAdapter};
pub use config::{telemetry_from_env, MembershipsConfig};
pub use domain::{DestinationType, Member, Membership};
pub use error::MembershipsError;
pub use ports::{DynMembershipsAdapter, MembershipsAdapter, GET_MEMBERS_FROM_DESTINATION};
pub use stream::{MembershipEvent, MembershipStream};
