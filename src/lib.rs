//! Declarative configuration resolution for utility-first stylesheet
//! generation.
//!
//! This crate models the configuration contract between a stylesheet build
//! engine and the people configuring it: which source files are scanned
//! for used style identifiers, which design tokens and conditional
//! variants are available, and which plugins are active. The engine
//! itself (content scanning, class parsing, CSS emission) lives elsewhere
//! and consumes the resolved configuration produced here.
//!
//! A build starts from a partial [`ConfigDeclaration`] (built fluently or
//! parsed from JSON/YAML), hands it to a [`ConfigResolver`], and receives
//! an immutable [`StyleConfiguration`] with every omission filled in from
//! the built-in defaults and every plugin reference resolved.
//!
//! # Example
//!
//! ```rust
//! use stylebase::{ConfigDeclaration, ConfigResolver, DarkModeStrategy};
//!
//! let declaration = ConfigDeclaration::new()
//!     .content_glob("src/**/*.html")
//!     .dark_mode(DarkModeStrategy::MediaQuery)
//!     .plugin("forms");
//!
//! let config = ConfigResolver::new().resolve(&declaration).unwrap();
//!
//! assert_eq!(config.content_globs(), ["src/**/*.html"]);
//! assert_eq!(config.plugin_ids().collect::<Vec<_>>(), ["forms"]);
//! ```
//!
//! Declarations merge *additively* over the defaults: a theme extension
//! that overrides `fontFamily.sans` keeps `fontFamily.mono` and every
//! other category untouched.

pub mod config;
mod content;
pub mod plugin;
pub mod profile;
pub mod theme;

pub use config::{
    ConfigDeclaration, ConfigError, ConfigResolver, DarkModeStrategy, GenerationMode,
    StyleConfiguration,
};
pub use plugin::{PluginHandle, PluginRegistry, StylePlugin};
pub use theme::{default_theme, default_variants, ThemeTokens, TokenValue};
