//! Design-token model and built-in defaults.
//!
//! This module provides:
//!
//! - [`TokenValue`]: a single token (scalar, flag, list, or nested group)
//! - [`ThemeTokens`]: a category-keyed token collection with additive merge
//! - [`default_theme`] / [`default_variants`]: the built-in tables user
//!   declarations extend
//!
//! Theme extension is additive: user tokens are layered over the defaults
//! without discarding categories or sibling keys the user did not name.

mod defaults;
mod tokens;

pub use defaults::{default_theme, default_variants};
pub use tokens::{ThemeTokens, TokenValue};
