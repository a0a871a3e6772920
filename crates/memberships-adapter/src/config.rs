//! Roster limits for the in-memory adapter
//!
//! # Example
//!
//! ```ignore
//! use memberships_adapter::MembershipsConfig;
//!
//! let config = MembershipsConfig::default()
//!     .with_max_members(500)
//!     .with_max_destinations(20);
//! config.validate()?;
//! ```

use crate::error::MembershipsError;
use adapter_core::{AdapterError, TelemetryConfig};
use serde::{Deserialize, Serialize};
use std::env;

/// Default registry name of the in-memory adapter.
pub const DEFAULT_ADAPTER_NAME: &str = "in-memory-memberships";

/// Prefix of every environment variable read by this crate.
pub const ENV_PREFIX: &str = "MEMBERSHIPS";

/// Upper bound accepted for `max_members_per_destination`.
pub const MEMBERS_HARD_LIMIT: usize = 100_000;

/// Configuration of the in-memory roster source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipsConfig {
    /// Name the adapter registers under
    pub adapter_name: String,
    /// Maximum members in one roster
    pub max_members_per_destination: usize,
    /// Maximum tracked destinations
    pub max_destinations: usize,
}

impl Default for MembershipsConfig {
    fn default() -> Self {
        Self {
            adapter_name: DEFAULT_ADAPTER_NAME.to_string(),
            max_members_per_destination: 1_000,
            max_destinations: 10_000,
        }
    }
}

impl MembershipsConfig {
    /// Create configuration from environment variables, falling back to
    /// defaults for unset or unparsable values.
    ///
    /// # Environment Variables
    ///
    /// - `MEMBERSHIPS_ADAPTER_NAME`: Registry name (default: in-memory-memberships)
    /// - `MEMBERSHIPS_MAX_MEMBERS`: Members per roster (default: 1000)
    /// - `MEMBERSHIPS_MAX_DESTINATIONS`: Tracked destinations (default: 10000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            adapter_name: env::var("MEMBERSHIPS_ADAPTER_NAME").unwrap_or(defaults.adapter_name),

            max_members_per_destination: env::var("MEMBERSHIPS_MAX_MEMBERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_members_per_destination),

            max_destinations: env::var("MEMBERSHIPS_MAX_DESTINATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_destinations),
        }
    }

    /// Validate the limits.
    pub fn validate(&self) -> Result<(), MembershipsError> {
        if self.adapter_name.trim().is_empty() {
            return Err(config_error("adapter_name cannot be empty"));
        }

        if self.max_members_per_destination == 0 {
            return Err(config_error("max_members_per_destination cannot be 0"));
        }

        if self.max_members_per_destination > MEMBERS_HARD_LIMIT {
            return Err(config_error(&format!(
                "max_members_per_destination {} exceeds {}",
                self.max_members_per_destination, MEMBERS_HARD_LIMIT
            )));
        }

        if self.max_destinations == 0 {
            return Err(config_error("max_destinations cannot be 0"));
        }

        Ok(())
    }

    /// Builder-style method to set the adapter name
    pub fn with_adapter_name(mut self, name: impl Into<String>) -> Self {
        self.adapter_name = name.into();
        self
    }

    /// Builder-style method to set max members per roster
    pub fn with_max_members(mut self, max: usize) -> Self {
        self.max_members_per_destination = max;
        self
    }

    /// Builder-style method to set max tracked destinations
    pub fn with_max_destinations(mut self, max: usize) -> Self {
        self.max_destinations = max;
        self
    }
}

/// Log settings read from the `MEMBERSHIPS_*` environment variables.
///
/// See [`TelemetryConfig::from_env`] for the variable names.
pub fn telemetry_from_env() -> TelemetryConfig {
    TelemetryConfig::from_env(ENV_PREFIX, "memberships-adapter")
}

fn config_error(message: &str) -> MembershipsError {
    AdapterError::Config(message.to_string()).into()
}
