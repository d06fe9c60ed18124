//! Configuration resolution errors.

use std::fmt;

/// Error returned when a declaration cannot be resolved.
///
/// All variants are fatal: resolution aborts at the first failure and no
/// partial configuration is produced. The offending field or identifier is
/// carried in the variant so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The declaration supplied no content globs.
    ///
    /// There is no default to fall back to: a build scanning zero files,
    /// or the wrong files, would silently emit nothing useful.
    MissingContentGlobs,
    /// A content pattern failed glob compilation.
    InvalidContentGlob {
        /// The pattern as written in the declaration.
        pattern: String,
        /// What the glob compiler rejected.
        reason: String,
    },
    /// A referenced plugin is not present in the registry.
    PluginNotFound {
        /// The identifier as written in the declaration.
        identifier: String,
    },
    /// The declaration text could not be parsed.
    Parse {
        /// The underlying parser message.
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn plugin_not_found(identifier: &str) -> Self {
        ConfigError::PluginNotFound {
            identifier: identifier.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingContentGlobs => {
                write!(f, "contentGlobs is missing or empty; nothing to scan")
            }
            ConfigError::InvalidContentGlob { pattern, reason } => {
                write!(f, "content glob '{}' is invalid: {}", pattern, reason)
            }
            ConfigError::PluginNotFound { identifier } => {
                write!(f, "plugin '{}' is not registered", identifier)
            }
            ConfigError::Parse { message } => {
                write!(f, "declaration could not be parsed: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
