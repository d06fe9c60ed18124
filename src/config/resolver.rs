//! Declaration-over-defaults merge and plugin resolution.

use std::collections::BTreeMap;

use tracing::debug;

use crate::content;
use crate::plugin::{PluginHandle, PluginRegistry};
use crate::theme::{default_theme, default_variants, ThemeTokens};

use super::declaration::ConfigDeclaration;
use super::error::ConfigError;
use super::resolved::StyleConfiguration;

/// Resolves partial declarations into complete configurations.
///
/// The resolver owns the defaults and the plugin registry; [`resolve`]
/// itself is a pure function of the declaration plus that fixed state, so
/// resolving the same declaration twice yields structurally identical
/// configurations.
///
/// [`resolve`]: ConfigResolver::resolve
///
/// # Example
///
/// ```rust
/// use stylebase::{ConfigDeclaration, ConfigResolver};
///
/// let resolver = ConfigResolver::new();
/// let config = resolver
///     .resolve(&ConfigDeclaration::new().content_glob("src/**/*.html"))
///     .unwrap();
///
/// assert_eq!(config.content_globs(), ["src/**/*.html"]);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    default_theme: ThemeTokens,
    default_variants: BTreeMap<String, Vec<String>>,
    registry: PluginRegistry,
}

impl ConfigResolver {
    /// Creates a resolver with the built-in defaults and the built-in
    /// plugin set.
    pub fn new() -> Self {
        Self::with_registry(PluginRegistry::built_in())
    }

    /// Creates a resolver with the built-in defaults and a caller-supplied
    /// plugin registry.
    pub fn with_registry(registry: PluginRegistry) -> Self {
        Self {
            default_theme: default_theme().clone(),
            default_variants: default_variants().clone(),
            registry,
        }
    }

    /// Creates a resolver with every default injected.
    ///
    /// Used when the host ships its own token set or variant table.
    pub fn with_defaults(
        default_theme: ThemeTokens,
        default_variants: BTreeMap<String, Vec<String>>,
        registry: PluginRegistry,
    ) -> Self {
        Self {
            default_theme,
            default_variants,
            registry,
        }
    }

    /// Resolves a declaration into a complete [`StyleConfiguration`].
    ///
    /// Scalar fields replace their defaults; `themeExtensions` and
    /// `variantOverrides` deep-merge over them, retaining everything the
    /// declaration does not name. Plugin references are resolved in
    /// declaration order.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingContentGlobs`] when `contentGlobs` is
    ///   absent or empty
    /// - [`ConfigError::InvalidContentGlob`] when a pattern fails glob
    ///   compilation
    /// - [`ConfigError::PluginNotFound`] when a reference does not
    ///   resolve; nothing partial is returned
    pub fn resolve(
        &self,
        declaration: &ConfigDeclaration,
    ) -> Result<StyleConfiguration, ConfigError> {
        let content_globs = match &declaration.content_globs {
            Some(globs) if !globs.is_empty() => globs.clone(),
            _ => return Err(ConfigError::MissingContentGlobs),
        };
        for pattern in &content_globs {
            content::validate_pattern(pattern)?;
        }

        let mode = declaration.mode.unwrap_or_default();
        let dark_mode_strategy = declaration.dark_mode_strategy.unwrap_or_default();

        let theme = match &declaration.theme_extensions {
            Some(extensions) => {
                debug!(
                    categories = extensions.len(),
                    "merging theme extensions over defaults"
                );
                extensions.merged_over(&self.default_theme)
            }
            None => self.default_theme.clone(),
        };

        let variants = match &declaration.variant_overrides {
            Some(overrides) if !overrides.is_empty() => {
                let mut merged = self.default_variants.clone();
                for (utility, list) in overrides {
                    merged.insert(utility.clone(), list.clone());
                }
                merged
            }
            _ => self.default_variants.clone(),
        };

        let mut plugins = Vec::new();
        for identifier in declaration.plugin_references.iter().flatten() {
            let plugin = self
                .registry
                .get(identifier)
                .ok_or_else(|| ConfigError::plugin_not_found(identifier))?;
            debug!(plugin = %identifier, "resolved plugin reference");
            plugins.push(PluginHandle::new(identifier.clone(), plugin));
        }

        debug!(
            globs = content_globs.len(),
            plugins = plugins.len(),
            "configuration resolved"
        );

        Ok(StyleConfiguration {
            mode,
            content_globs,
            dark_mode_strategy,
            theme,
            variants,
            plugins,
        })
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}
