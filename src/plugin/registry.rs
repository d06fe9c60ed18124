//! Name-based plugin lookup.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::builtin::{AspectRatio, Forms, LineClamp, Typography};
use super::StylePlugin;

/// Registry mapping plugin identifiers to capabilities.
///
/// Lookup is by exact identifier. Registering a plugin under an identifier
/// that is already taken replaces the previous registration: last
/// registration wins, mirroring how later entries shadow earlier ones in
/// declaration files.
///
/// # Example
///
/// ```rust
/// use stylebase::PluginRegistry;
///
/// let registry = PluginRegistry::built_in();
/// assert!(registry.contains("forms"));
/// assert!(!registry.contains("nonexistent-plugin"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    plugins: BTreeMap<String, Arc<dyn StylePlugin>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the capabilities the pipeline
    /// ships: `forms`, `typography`, `aspect-ratio`, and `line-clamp`.
    pub fn built_in() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Forms));
        registry.register(Arc::new(Typography));
        registry.register(Arc::new(AspectRatio));
        registry.register(Arc::new(LineClamp));
        registry
    }

    /// Registers a capability under its own identifier.
    pub fn register(&mut self, plugin: Arc<dyn StylePlugin>) {
        self.plugins.insert(plugin.id().to_string(), plugin);
    }

    /// Looks up a capability by identifier.
    pub fn get(&self, id: &str) -> Option<Arc<dyn StylePlugin>> {
        self.plugins.get(id).cloned()
    }

    /// Returns true if the identifier resolves.
    pub fn contains(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// Iterates over registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(|k| k.as_str())
    }

    /// Number of registered capabilities.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
