//! Adapter registry
//!
//! An explicit, insertion-ordered catalog mapping runtime identifiers to
//! adapter instances. Built-ins are registered by an explicit constructor
//! rather than import-time side effects, so there is no hidden ordering
//! between registration and lookup.

use indexmap::IndexMap;

use crate::{Adapter, MakeAdapter, N8nAdapter, PowerAutomateAdapter, ZapierAdapter};

/// Catalog of adapters keyed by runtime identifier
pub struct AdapterRegistry {
    adapters: IndexMap<&'static str, Box<dyn Adapter>>,
}

impl AdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            adapters: IndexMap::new(),
        }
    }

    /// Create a registry with the four built-in adapters, registered in
    /// canonical order: zapier, make, n8n, power-automate.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ZapierAdapter));
        registry.register(Box::new(MakeAdapter));
        registry.register(Box::new(N8nAdapter));
        registry.register(Box::new(PowerAutomateAdapter));
        registry
    }

    /// Register an adapter under its runtime identifier.
    ///
    /// Registering over an existing identifier replaces the binding (last
    /// write wins) while keeping its position in enumeration order. The
    /// replacement is logged so shadowing a built-in stays observable.
    pub fn register(&mut self, adapter: Box<dyn Adapter>) {
        let runtime = adapter.runtime();
        if self.adapters.insert(runtime, adapter).is_some() {
            tracing::warn!("adapter '{}' was already registered, replacing it", runtime);
        }
    }

    /// Look up an adapter by runtime identifier
    pub fn get(&self, runtime: &str) -> Option<&dyn Adapter> {
        self.adapters.get(runtime).map(|adapter| adapter.as_ref())
    }

    /// Registered runtime identifiers, in registration order
    pub fn list(&self) -> Vec<&'static str> {
        self.adapters.keys().copied().collect()
    }

    /// Iterate adapters in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &dyn Adapter)> {
        self.adapters
            .iter()
            .map(|(runtime, adapter)| (*runtime, adapter.as_ref()))
    }

    /// Number of registered adapters
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// True when no adapter has been registered
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
