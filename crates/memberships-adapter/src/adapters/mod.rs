//! Adapters Layer
//!
//! Concrete implementations of the `MembershipsAdapter` port.
//!
//! ## Adapters
//!
//! - `BaseMembershipsAdapter` - No data source, every capability unimplemented
//! - `InMemoryMembershipsAdapter` - Process-local roster table for tests and demos

pub mod base;
pub mod in_memory;

pub use base::BaseMembershipsAdapter;
pub use in_memory::InMemoryMembershipsAdapter;
