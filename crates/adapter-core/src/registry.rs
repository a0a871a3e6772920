//! # Adapter Registry - Runtime Registration and Lookup
//!
//! Holds the adapters a component set was configured with, keyed by name.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = AdapterRegistry::new();
//! registry.register(Arc::new(InMemoryMembershipsAdapter::new()));
//!
//! let adapter = registry.get("in-memory-memberships")?;
//! ```

use crate::adapter::{AdapterInfo, AdapterKind, DynAdapter};
use crate::error::AdapterError;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Central registry for adapters, keyed by adapter name.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<String, DynAdapter>,
}

impl AdapterRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter, replacing any adapter with the same name.
    pub fn register(&mut self, adapter: DynAdapter) {
        let name = adapter.name().to_string();
        info!(adapter = %name, kind = %adapter.kind(), "Registering adapter");

        if self.adapters.insert(name.clone(), adapter).is_some() {
            warn!(adapter = %name, "Adapter already registered, replacing");
        }
    }

    /// Register an adapter, failing if the name is taken.
    pub fn try_register(&mut self, adapter: DynAdapter) -> Result<(), AdapterError> {
        let name = adapter.name();
        if self.adapters.contains_key(name) {
            return Err(AdapterError::AlreadyRegistered {
                name: name.to_string(),
            });
        }
        self.register(adapter);
        Ok(())
    }

    /// Remove an adapter by name.
    pub fn unregister(&mut self, name: &str) -> Result<DynAdapter, AdapterError> {
        let adapter = self
            .adapters
            .remove(name)
            .ok_or_else(|| AdapterError::NotRegistered {
                name: name.to_string(),
            })?;
        debug!(adapter = %name, "Adapter unregistered");
        Ok(adapter)
    }

    /// Look up an adapter by name.
    pub fn get(&self, name: &str) -> Result<DynAdapter, AdapterError> {
        self.adapters
            .get(name)
            .cloned()
            .ok_or_else(|| AdapterError::NotRegistered {
                name: name.to_string(),
            })
    }

    /// Check if an adapter is registered.
    #[must_use]
    pub fn is_registered(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    /// Registered adapter names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.adapters.keys().cloned().collect()
    }

    /// Adapters belonging to one family.
    #[must_use]
    pub fn by_kind(&self, kind: AdapterKind) -> Vec<DynAdapter> {
        self.adapters
            .values()
            .filter(|a| a.kind() == kind)
            .cloned()
            .collect()
    }

    /// Info for every registered adapter.
    #[must_use]
    pub fn infos(&self) -> Vec<AdapterInfo> {
        self.adapters.values().map(|a| a.info()).collect()
    }

    /// JSON description of every registered adapter, keyed by name.
    #[must_use]
    pub fn describe_all(&self) -> serde_json::Value {
        let mut out = serde_json::Map::new();

        for (name, adapter) in &self.adapters {
            let info = adapter.info();
            out.insert(
                name.clone(),
                serde_json::json!({
                    "kind": info.kind.as_str(),
                    "version": info.version,
                    "description": info.description,
                }),
            );
        }

        serde_json::Value::Object(out)
    }

    /// Number of registered adapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no adapters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}
