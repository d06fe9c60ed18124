//! Partial user-supplied declarations.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::theme::ThemeTokens;

use super::error::ConfigError;
use super::types::{DarkModeStrategy, GenerationMode};

/// A partial configuration as written by the user.
///
/// Every field may be omitted; omitted fields fall back to built-in
/// defaults during resolution. Declarations can be built fluently or
/// parsed from JSON/YAML text. Canonical field names follow the
/// declarative shape (`contentGlobs`, `darkModeStrategy`, ...); the key
/// spellings found in existing config files (`purge`, `content`,
/// `darkMode`, `theme`, `variants`, `plugins`) are accepted as aliases.
///
/// # Example
///
/// ```rust
/// use stylebase::{ConfigDeclaration, DarkModeStrategy};
///
/// let declaration = ConfigDeclaration::new()
///     .content_glob("src/**/*.html")
///     .content_glob("src/**/*.js")
///     .dark_mode(DarkModeStrategy::ClassAttribute)
///     .plugin("forms");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigDeclaration {
    pub(crate) mode: Option<GenerationMode>,
    #[serde(alias = "purge", alias = "content")]
    pub(crate) content_globs: Option<Vec<String>>,
    #[serde(alias = "darkMode")]
    pub(crate) dark_mode_strategy: Option<DarkModeStrategy>,
    #[serde(alias = "theme")]
    pub(crate) theme_extensions: Option<ThemeTokens>,
    #[serde(alias = "variants")]
    pub(crate) variant_overrides: Option<BTreeMap<String, Vec<String>>>,
    #[serde(alias = "plugins")]
    pub(crate) plugin_references: Option<Vec<String>>,
}

impl ConfigDeclaration {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a declaration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON or
    /// does not match the declarative shape.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses a declaration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid YAML or
    /// does not match the declarative shape.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Sets the generation mode.
    pub fn mode(mut self, mode: GenerationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Appends a content glob, preserving declaration order.
    pub fn content_glob(mut self, pattern: impl Into<String>) -> Self {
        self.content_globs
            .get_or_insert_with(Vec::new)
            .push(pattern.into());
        self
    }

    /// Appends several content globs at once.
    pub fn content_globs<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_globs
            .get_or_insert_with(Vec::new)
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the dark-mode strategy.
    pub fn dark_mode(mut self, strategy: DarkModeStrategy) -> Self {
        self.dark_mode_strategy = Some(strategy);
        self
    }

    /// Sets the theme extensions layered over the default tokens.
    pub fn theme_extensions(mut self, tokens: ThemeTokens) -> Self {
        self.theme_extensions = Some(tokens);
        self
    }

    /// Overrides the variant list for one utility.
    pub fn variant_override<I, S>(mut self, utility: impl Into<String>, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variant_overrides
            .get_or_insert_with(BTreeMap::new)
            .insert(
                utility.into(),
                variants.into_iter().map(Into::into).collect(),
            );
        self
    }

    /// Appends a plugin reference, preserving declaration order.
    pub fn plugin(mut self, identifier: impl Into<String>) -> Self {
        self.plugin_references
            .get_or_insert_with(Vec::new)
            .push(identifier.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TokenValue;

    #[test]
    fn test_builder_accumulates_globs_in_order() {
        let declaration = ConfigDeclaration::new()
            .content_glob("a/**/*.x")
            .content_glob("b/**/*.y");

        assert_eq!(
            declaration.content_globs,
            Some(vec!["a/**/*.x".to_string(), "b/**/*.y".to_string()])
        );
    }

    #[test]
    fn test_parse_canonical_json() {
        let declaration = ConfigDeclaration::from_json(
            r#"{
                "mode": "just-in-time",
                "contentGlobs": ["src/**/*.html"],
                "darkModeStrategy": "media-query",
                "pluginReferences": ["forms"]
            }"#,
        )
        .unwrap();

        assert_eq!(declaration.mode, Some(GenerationMode::JustInTime));
        assert_eq!(
            declaration.dark_mode_strategy,
            Some(DarkModeStrategy::MediaQuery)
        );
        assert_eq!(
            declaration.plugin_references,
            Some(vec!["forms".to_string()])
        );
    }

    #[test]
    fn test_parse_legacy_spellings_match_canonical() {
        let legacy = ConfigDeclaration::from_json(
            r#"{
                "mode": "jit",
                "purge": ["src/**/*.html"],
                "darkMode": false,
                "theme": { "container": { "center": true } },
                "plugins": ["forms"]
            }"#,
        )
        .unwrap();

        let canonical = ConfigDeclaration::new()
            .mode(GenerationMode::JustInTime)
            .content_glob("src/**/*.html")
            .dark_mode(DarkModeStrategy::Disabled)
            .theme_extensions(
                crate::theme::ThemeTokens::new()
                    .add("container", TokenValue::group([("center", true)])),
            )
            .plugin("forms");

        assert_eq!(legacy, canonical);
    }

    #[test]
    fn test_parse_yaml_declaration() {
        let declaration = ConfigDeclaration::from_yaml(
            "contentGlobs:\n  - src/**/*.html\ndarkModeStrategy: class-attribute\n",
        )
        .unwrap();

        assert_eq!(
            declaration.content_globs,
            Some(vec!["src/**/*.html".to_string()])
        );
        assert_eq!(
            declaration.dark_mode_strategy,
            Some(DarkModeStrategy::ClassAttribute)
        );
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = ConfigDeclaration::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_empty_declaration_has_no_fields() {
        assert_eq!(ConfigDeclaration::new(), ConfigDeclaration::default());
        assert_eq!(ConfigDeclaration::from_json("{}").unwrap(), ConfigDeclaration::new());
    }
}
