//! Ports Layer
//!
//! Defines the interface (trait) UI components program against. Concrete
//! data sources plug in by implementing it.

pub mod inbound;

pub use inbound::{DynMembershipsAdapter, MembershipsAdapter, GET_MEMBERS_FROM_DESTINATION};
