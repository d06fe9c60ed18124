//! Built-in declaration profiles.
//!
//! The pipeline ships two near-duplicate configuration variants that
//! differ in content scope and in how far the theme extension goes. They
//! are kept as separately constructible profiles; neither is authoritative
//! and they are never merged into one.

use crate::config::ConfigDeclaration;
use crate::theme::{default_theme, ThemeTokens, TokenValue};

/// Declaration scanning both the client and server source trees.
///
/// Extends the sans font stack with `Inter var`, centers the container
/// with `2rem` padding, and activates the `forms` plugin.
pub fn full_stack() -> ConfigDeclaration {
    ConfigDeclaration::new()
        .content_glob("src/cljs/**/*.cljs")
        .content_glob("src/clj/**/*.clj")
        .theme_extensions(
            ThemeTokens::new()
                .add(
                    "fontFamily",
                    TokenValue::group([("sans", TokenValue::List(inter_sans_stack()))]),
                )
                .add(
                    "container",
                    TokenValue::group([
                        ("center", TokenValue::Flag(true)),
                        ("padding", TokenValue::from("2rem")),
                    ]),
                ),
        )
        .plugin("forms")
}

/// Declaration scanning the client source tree only.
///
/// Extends the sans font stack with `Inter var` and activates the `forms`
/// plugin; the container is left at its default.
pub fn client_only() -> ConfigDeclaration {
    ConfigDeclaration::new()
        .content_glob("src/cljs/**/*.cljs")
        .theme_extensions(ThemeTokens::new().add(
            "fontFamily",
            TokenValue::group([("sans", TokenValue::List(inter_sans_stack()))]),
        ))
        .plugin("forms")
}

/// `Inter var` prepended to the default sans stack.
fn inter_sans_stack() -> Vec<String> {
    let mut stack = vec!["Inter var".to_string()];
    if let Some(sans) = default_theme()
        .get("fontFamily")
        .and_then(|family| family.get("sans"))
        .and_then(TokenValue::as_list)
    {
        stack.extend(sans.iter().cloned());
    }
    stack
}
