//! Domain Layer
//!
//! The normalized roster shape every memberships adapter emits. Pure data,
//! no I/O.

pub mod destination;
pub mod member;
pub mod membership;

pub use destination::DestinationType;
pub use member::Member;
pub use membership::Membership;
