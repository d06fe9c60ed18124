//! Design-token tree with additive merge.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single design-token value.
///
/// Tokens form a closed tree: bare strings (`"2rem"`), flags
/// (`center: true`), ordered lists (font stacks), and nested groups keyed
/// by token name. The untagged representation matches how declaration
/// files write token values directly, without any wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A boolean switch, e.g. `container.center`.
    Flag(bool),
    /// A single scalar value, e.g. a length or color.
    Atom(String),
    /// An ordered list of values, e.g. a font-family stack.
    List(Vec<String>),
    /// A nested group of named tokens.
    Group(BTreeMap<String, TokenValue>),
}

impl TokenValue {
    /// Builds a [`TokenValue::List`] from anything yielding strings.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TokenValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a [`TokenValue::Group`] from key/value pairs.
    pub fn group<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<TokenValue>,
    {
        TokenValue::Group(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the scalar value if this token is an [`TokenValue::Atom`].
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            TokenValue::Atom(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the switch value if this token is a [`TokenValue::Flag`].
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            TokenValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the items if this token is a [`TokenValue::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TokenValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the nested tokens if this token is a [`TokenValue::Group`].
    pub fn as_group(&self) -> Option<&BTreeMap<String, TokenValue>> {
        match self {
            TokenValue::Group(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a key inside a group token.
    ///
    /// Returns `None` for non-group tokens.
    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.as_group().and_then(|entries| entries.get(key))
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Atom(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Atom(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        TokenValue::Flag(value)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(items: Vec<String>) -> Self {
        TokenValue::List(items)
    }
}

impl From<Vec<&str>> for TokenValue {
    fn from(items: Vec<&str>) -> Self {
        TokenValue::list(items)
    }
}

impl From<BTreeMap<String, TokenValue>> for TokenValue {
    fn from(entries: BTreeMap<String, TokenValue>) -> Self {
        TokenValue::Group(entries)
    }
}

impl From<BTreeMap<String, TokenValue>> for ThemeTokens {
    fn from(categories: BTreeMap<String, TokenValue>) -> Self {
        ThemeTokens(categories)
    }
}

/// A collection of design tokens keyed by category.
///
/// Categories map names like `fontFamily` or `container` to a
/// [`TokenValue`] tree. The backing map is ordered so iteration and
/// serialization are deterministic.
///
/// # Example
///
/// ```rust
/// use stylebase::{ThemeTokens, TokenValue};
///
/// let tokens = ThemeTokens::new()
///     .add("container", TokenValue::group([("padding", "2rem")]))
///     .add("fontFamily", TokenValue::group([
///         ("sans", TokenValue::list(["Inter var", "sans-serif"])),
///     ]));
///
/// assert!(tokens.get("container").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTokens(BTreeMap<String, TokenValue>);

impl ThemeTokens {
    /// Creates an empty token collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token category, returning the updated collection for chaining.
    pub fn add<V: Into<TokenValue>>(mut self, category: &str, value: V) -> Self {
        self.0.insert(category.to_string(), value.into());
        self
    }

    /// Looks up a token category by name.
    pub fn get(&self, category: &str) -> Option<&TokenValue> {
        self.0.get(category)
    }

    /// Returns true if no categories are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over category names in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Iterates over `(category, value)` pairs in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Layers these tokens over a base collection.
    ///
    /// The merge is additive: categories absent from `self` are taken from
    /// `base` unchanged, and when both sides hold a group for the same
    /// name, the groups merge key by key. Any other combination replaces
    /// the base value outright.
    pub fn merged_over(&self, base: &ThemeTokens) -> ThemeTokens {
        let mut merged = base.0.clone();
        for (category, value) in &self.0 {
            let next = match merged.get(category) {
                Some(existing) => merge_value(existing, value),
                None => value.clone(),
            };
            merged.insert(category.clone(), next);
        }
        ThemeTokens(merged)
    }
}

/// Merges a single overlay value onto a base value.
///
/// Group-on-group recurses; everything else takes the overlay.
fn merge_value(base: &TokenValue, overlay: &TokenValue) -> TokenValue {
    match (base, overlay) {
        (TokenValue::Group(base_entries), TokenValue::Group(overlay_entries)) => {
            let mut merged = base_entries.clone();
            for (key, value) in overlay_entries {
                let next = match merged.get(key) {
                    Some(existing) => merge_value(existing, value),
                    None => value.clone(),
                };
                merged.insert(key.clone(), next);
            }
            TokenValue::Group(merged)
        }
        _ => overlay.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_tokens() -> ThemeTokens {
        ThemeTokens::new()
            .add(
                "fontFamily",
                TokenValue::group([
                    ("sans", TokenValue::list(["system-ui", "sans-serif"])),
                    ("mono", TokenValue::list(["ui-monospace", "monospace"])),
                ]),
            )
            .add("container", TokenValue::Group(BTreeMap::new()))
    }

    #[test]
    fn test_merge_retains_untouched_categories() {
        let overlay = ThemeTokens::new().add(
            "fontFamily",
            TokenValue::group([("sans", TokenValue::list(["Inter var"]))]),
        );

        let merged = overlay.merged_over(&base_tokens());
        assert!(merged.get("container").is_some());
    }

    #[test]
    fn test_merge_retains_sibling_keys() {
        let overlay = ThemeTokens::new().add(
            "fontFamily",
            TokenValue::group([("sans", TokenValue::list(["Inter var"]))]),
        );

        let merged = overlay.merged_over(&base_tokens());
        let family = merged.get("fontFamily").unwrap();

        assert_eq!(
            family.get("sans").unwrap().as_list().unwrap(),
            ["Inter var"]
        );
        assert_eq!(
            family.get("mono").unwrap().as_list().unwrap(),
            ["ui-monospace", "monospace"]
        );
    }

    #[test]
    fn test_merge_non_group_replaces() {
        let base = ThemeTokens::new().add("spacing", TokenValue::group([("1", "0.25rem")]));
        let overlay = ThemeTokens::new().add("spacing", "none");

        let merged = overlay.merged_over(&base);
        assert_eq!(merged.get("spacing").unwrap().as_atom(), Some("none"));
    }

    #[test]
    fn test_merge_empty_overlay_is_identity() {
        let base = base_tokens();
        let merged = ThemeTokens::new().merged_over(&base);
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_nested_groups() {
        let base = ThemeTokens::new().add(
            "colors",
            TokenValue::group([(
                "gray",
                TokenValue::group([("100", "#f5f5f5"), ("900", "#171717")]),
            )]),
        );
        let overlay = ThemeTokens::new().add(
            "colors",
            TokenValue::group([("gray", TokenValue::group([("900", "#0a0a0a")]))]),
        );

        let merged = overlay.merged_over(&base);
        let gray = merged.get("colors").unwrap().get("gray").unwrap();

        assert_eq!(gray.get("100").unwrap().as_atom(), Some("#f5f5f5"));
        assert_eq!(gray.get("900").unwrap().as_atom(), Some("#0a0a0a"));
    }

    #[test]
    fn test_deserialize_token_shapes() {
        let tokens: ThemeTokens = serde_json::from_str(
            r#"{
                "container": { "center": true, "padding": "2rem" },
                "fontFamily": { "sans": ["Inter var", "sans-serif"] }
            }"#,
        )
        .unwrap();

        let container = tokens.get("container").unwrap();
        assert_eq!(container.get("center").unwrap().as_flag(), Some(true));
        assert_eq!(container.get("padding").unwrap().as_atom(), Some("2rem"));

        let sans = tokens.get("fontFamily").unwrap().get("sans").unwrap();
        assert_eq!(sans.as_list().unwrap(), ["Inter var", "sans-serif"]);
    }

    #[test]
    fn test_token_value_accessors_reject_other_variants() {
        let atom = TokenValue::from("2rem");
        assert!(atom.as_flag().is_none());
        assert!(atom.as_list().is_none());
        assert!(atom.as_group().is_none());
        assert!(atom.get("anything").is_none());
    }
}
