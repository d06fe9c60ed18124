//! Plugin capability interface and name-based registry.
//!
//! Plugins are opaque behavior extensions activated during style
//! generation. Resolution only needs them to be *resolvable*: a reference
//! in a declaration either maps to a registered capability or the whole
//! configuration is rejected. Invoking plugin behavior belongs to the
//! build engine, not to this crate.

mod builtin;
mod registry;

use std::fmt;
use std::sync::Arc;

pub use builtin::{AspectRatio, Forms, LineClamp, Typography};
pub use registry::PluginRegistry;

/// A named behavior extension activated during style generation.
///
/// Implementations carry no behavior at this layer; the stable identifier
/// is the whole contract. Richer hooks (rules, utilities, variants) are
/// negotiated between the plugin and the build engine.
pub trait StylePlugin: fmt::Debug + Send + Sync {
    /// Stable identifier used in declaration `pluginReferences`.
    fn id(&self) -> &str;
}

/// A plugin reference resolved against a [`PluginRegistry`].
///
/// Pairs the identifier from the declaration with the registered
/// capability. Handles compare by identifier, so resolved configurations
/// can be compared structurally.
#[derive(Debug, Clone)]
pub struct PluginHandle {
    id: String,
    plugin: Arc<dyn StylePlugin>,
}

impl PluginHandle {
    pub(crate) fn new(id: String, plugin: Arc<dyn StylePlugin>) -> Self {
        Self { id, plugin }
    }

    /// The identifier this handle was resolved from.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The resolved capability.
    pub fn plugin(&self) -> &Arc<dyn StylePlugin> {
        &self.plugin
    }
}

impl PartialEq for PluginHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PluginHandle {}
