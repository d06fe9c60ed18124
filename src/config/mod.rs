//! Configuration declaration, resolution, and errors.
//!
//! This module provides the contract between the build engine and its
//! users:
//!
//! - [`ConfigDeclaration`]: the partial declaration as written
//! - [`ConfigResolver`]: merges a declaration over built-in defaults and
//!   resolves plugin references
//! - [`StyleConfiguration`]: the immutable, fully-resolved result
//! - [`ConfigError`]: the flat error taxonomy for failed resolution
//!
//! Resolution is single-shot and pure: no I/O, no intermediate states, no
//! shared mutable state across calls.

mod declaration;
mod error;
mod resolved;
mod resolver;
mod types;

pub use declaration::ConfigDeclaration;
pub use error::ConfigError;
pub use resolved::StyleConfiguration;
pub use resolver::ConfigResolver;
pub use types::{DarkModeStrategy, GenerationMode};
