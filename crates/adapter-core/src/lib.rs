//! # Adapter Core
//!
//! Base capability shared by every data adapter.
//!
//! ## Design Philosophy
//!
//! - **Pluggable**: UI components depend on adapter traits, never on a
//!   concrete data source.
//! - **Named**: every adapter carries a name so it can be registered and
//!   looked up at runtime.
//! - **Family-typed**: an adapter declares which family it belongs to
//!   (`AdapterKind`), e.g. memberships or rooms.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use adapter_core::{AdapterRegistry, TelemetryConfig};
//!
//! adapter_core::init_tracing_once(&TelemetryConfig::from_env("ROSTERS", "rosters"))?;
//!
//! let mut registry = AdapterRegistry::new();
//! registry.register(Arc::new(MyMembershipsAdapter::new()));
//! ```

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod adapter;
pub mod error;
pub mod registry;
pub mod telemetry;

pub use adapter::{Adapter, AdapterInfo, AdapterKind, DynAdapter};
pub use error::AdapterError;
pub use registry::AdapterRegistry;
pub use telemetry::{init_tracing, init_tracing_once, TelemetryConfig};
