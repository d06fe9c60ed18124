//! The fully-resolved configuration handed to the build engine.

use std::collections::BTreeMap;

use globset::GlobSet;

use crate::content;
use crate::plugin::PluginHandle;
use crate::theme::ThemeTokens;

use super::error::ConfigError;
use super::types::{DarkModeStrategy, GenerationMode};

/// A fully-resolved style configuration.
///
/// Produced by [`ConfigResolver::resolve`](super::ConfigResolver::resolve)
/// once per build invocation. Read-only for the life of that build: every
/// field was merged with the built-in defaults and every plugin reference
/// resolved before this value existed.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfiguration {
    pub(crate) mode: GenerationMode,
    pub(crate) content_globs: Vec<String>,
    pub(crate) dark_mode_strategy: DarkModeStrategy,
    pub(crate) theme: ThemeTokens,
    pub(crate) variants: BTreeMap<String, Vec<String>>,
    pub(crate) plugins: Vec<PluginHandle>,
}

impl StyleConfiguration {
    /// The generation strategy for this build.
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Patterns for the source files to scan, in declaration order.
    pub fn content_globs(&self) -> &[String] {
        &self.content_globs
    }

    /// Compiles the content globs into a single matcher.
    ///
    /// The patterns were validated at resolve time, so compilation is
    /// expected to succeed; any residual compiler rejection surfaces as
    /// [`ConfigError::InvalidContentGlob`].
    pub fn content_matcher(&self) -> Result<GlobSet, ConfigError> {
        content::build_matcher(&self.content_globs)
    }

    /// How dark-mode variants are activated.
    pub fn dark_mode_strategy(&self) -> DarkModeStrategy {
        self.dark_mode_strategy
    }

    /// The merged design-token set (defaults plus user extensions).
    pub fn theme(&self) -> &ThemeTokens {
        &self.theme
    }

    /// The merged per-utility variant table.
    pub fn variants(&self) -> &BTreeMap<String, Vec<String>> {
        &self.variants
    }

    /// Variant list for one utility, if the utility is known.
    pub fn variants_for(&self, utility: &str) -> Option<&[String]> {
        self.variants.get(utility).map(|v| v.as_slice())
    }

    /// Resolved plugins in application order.
    pub fn plugins(&self) -> &[PluginHandle] {
        &self.plugins
    }

    /// Identifiers of the resolved plugins, in application order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|p| p.id())
    }
}
