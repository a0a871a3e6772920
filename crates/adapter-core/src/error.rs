//! Error types shared by all adapters

use thiserror::Error;

/// Errors raised by the adapter base layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// An adapter with this name is already registered.
    #[error("Adapter already registered: {name}")]
    AlreadyRegistered { name: String },

    /// No adapter is registered under this name.
    #[error("Adapter not registered: {name}")]
    NotRegistered { name: String },

    /// Configuration failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("Telemetry error: {0}")]
    Telemetry(String),
}
