//! Built-in default token and variant tables.
//!
//! These are process-wide constants: they are computed once, never mutated,
//! and handed to the resolver at construction so resolution stays a pure
//! function of its input.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::tokens::{ThemeTokens, TokenValue};

static DEFAULT_THEME: Lazy<ThemeTokens> = Lazy::new(|| {
    ThemeTokens::new()
        .add("container", TokenValue::Group(BTreeMap::new()))
        .add(
            "fontFamily",
            TokenValue::group([
                (
                    "sans",
                    TokenValue::list([
                        "ui-sans-serif",
                        "system-ui",
                        "-apple-system",
                        "BlinkMacSystemFont",
                        "\"Segoe UI\"",
                        "Roboto",
                        "\"Helvetica Neue\"",
                        "Arial",
                        "\"Noto Sans\"",
                        "sans-serif",
                        "\"Apple Color Emoji\"",
                        "\"Segoe UI Emoji\"",
                        "\"Segoe UI Symbol\"",
                        "\"Noto Color Emoji\"",
                    ]),
                ),
                (
                    "serif",
                    TokenValue::list([
                        "ui-serif",
                        "Georgia",
                        "Cambria",
                        "\"Times New Roman\"",
                        "Times",
                        "serif",
                    ]),
                ),
                (
                    "mono",
                    TokenValue::list([
                        "ui-monospace",
                        "SFMono-Regular",
                        "Menlo",
                        "Monaco",
                        "Consolas",
                        "\"Liberation Mono\"",
                        "\"Courier New\"",
                        "monospace",
                    ]),
                ),
            ]),
        )
        .add(
            "screens",
            TokenValue::group([
                ("sm", "640px"),
                ("md", "768px"),
                ("lg", "1024px"),
                ("xl", "1280px"),
                ("2xl", "1536px"),
            ]),
        )
});

static DEFAULT_VARIANTS: Lazy<BTreeMap<String, Vec<String>>> = Lazy::new(|| {
    let table: &[(&str, &[&str])] = &[
        ("accessibility", &["responsive", "focus-within", "focus"]),
        (
            "backgroundColor",
            &[
                "responsive",
                "dark",
                "group-hover",
                "focus-within",
                "hover",
                "focus",
            ],
        ),
        (
            "borderColor",
            &[
                "responsive",
                "dark",
                "group-hover",
                "focus-within",
                "hover",
                "focus",
            ],
        ),
        ("fontWeight", &["responsive", "focus-within", "hover", "focus"]),
        (
            "opacity",
            &["responsive", "group-hover", "focus-within", "hover", "focus"],
        ),
        (
            "textColor",
            &[
                "responsive",
                "dark",
                "group-hover",
                "focus-within",
                "hover",
                "focus",
            ],
        ),
        ("textDecoration", &["responsive", "group-hover", "focus-within", "hover", "focus"]),
    ];

    table
        .iter()
        .map(|(utility, variants)| {
            (
                utility.to_string(),
                variants.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
});

/// Returns the built-in default token set.
pub fn default_theme() -> &'static ThemeTokens {
    &DEFAULT_THEME
}

/// Returns the built-in per-utility variant table.
pub fn default_variants() -> &'static BTreeMap<String, Vec<String>> {
    &DEFAULT_VARIANTS
}
