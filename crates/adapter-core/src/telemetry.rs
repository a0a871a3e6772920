//! Tracing setup and its configuration from environment variables.

use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AdapterError;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to the startup log line.
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Whether to include file and line in log lines
    pub with_source_location: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self::new("adapter")
    }
}

impl TelemetryConfig {
    /// Create configuration for a service with the default log settings.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
            with_source_location: false,
        }
    }

    /// Create configuration from environment variables under `prefix`.
    ///
    /// # Environment Variables
    ///
    /// - `{prefix}_SERVICE_NAME`: Service name (default: `default_service`)
    /// - `{prefix}_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `{prefix}_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `{prefix}_LOG_SOURCE`: Include file/line (default: false)
    pub fn from_env(prefix: &str, default_service: &str) -> Self {
        let var = |name: &str| env::var(format!("{prefix}_{name}"));

        Self {
            service_name: var("SERVICE_NAME").unwrap_or_else(|_| default_service.to_string()),

            log_level: var("LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: var("JSON_LOGS").map(|v| parse_flag(&v)).unwrap_or(false),

            with_source_location: var("LOG_SOURCE").map(|v| parse_flag(&v)).unwrap_or(false),
        }
    }

    /// Builder-style method to set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Builder-style method to toggle JSON output.
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Install the global tracing subscriber.
///
/// Fails if the filter directive is invalid or a global subscriber is
/// already installed.
pub fn init_tracing(config: &TelemetryConfig) -> Result<(), AdapterError> {
    if install(config)? {
        Ok(())
    } else {
        Err(AdapterError::Telemetry(
            "global subscriber already installed".to_string(),
        ))
    }
}

/// Install the global tracing subscriber unless one is already present.
///
/// Returns `Ok(true)` if this call installed it and `Ok(false)` if another
/// subscriber was already installed. An invalid filter directive is still
/// an error.
pub fn init_tracing_once(config: &TelemetryConfig) -> Result<bool, AdapterError> {
    install(config)
}

/// Returns `Ok(false)` when a global subscriber is already set.
fn install(config: &TelemetryConfig) -> Result<bool, AdapterError> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| AdapterError::Telemetry(e.to_string()))?;

    let installed = if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(json_layer)
            .try_init()
            .is_ok()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(config.with_source_location)
            .with_line_number(config.with_source_location);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::info!(
            service = %config.service_name,
            level = %config.log_level,
            json = config.json_logs,
            "Tracing initialized"
        );
    }

    Ok(installed)
}
