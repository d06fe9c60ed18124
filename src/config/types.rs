//! Scalar configuration enums.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Strategy for generating utility classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// Generate only the classes observed in scanned content.
    ///
    /// Declarations may also write the legacy spelling `"jit"`.
    #[default]
    #[serde(alias = "jit")]
    JustInTime,
    /// Generate the full predefined utility set up front.
    Default,
}

/// How dark-mode variants are activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DarkModeStrategy {
    /// No dark variants are generated.
    #[default]
    Disabled,
    /// Dark variants apply under a `prefers-color-scheme: dark` query.
    MediaQuery,
    /// Dark variants apply under an ancestor class toggle.
    ClassAttribute,
}

// Hand-written so declarations can keep the historical spellings: the field
// accepts "media"/"class" as well as the literal `false` for disabled.
impl<'de> Deserialize<'de> for DarkModeStrategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StrategyVisitor;

        impl<'de> Visitor<'de> for StrategyVisitor {
            type Value = DarkModeStrategy;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(
                    "\"disabled\", \"media-query\", \"class-attribute\", or false",
                )
            }

            fn visit_bool<E: de::Error>(self, value: bool) -> Result<Self::Value, E> {
                if value {
                    Err(E::custom(
                        "dark mode cannot be enabled without a strategy; \
                         use \"media-query\" or \"class-attribute\"",
                    ))
                } else {
                    Ok(DarkModeStrategy::Disabled)
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                match value {
                    "disabled" => Ok(DarkModeStrategy::Disabled),
                    "media-query" | "media" => Ok(DarkModeStrategy::MediaQuery),
                    "class-attribute" | "class" => Ok(DarkModeStrategy::ClassAttribute),
                    other => Err(E::unknown_variant(
                        other,
                        &["disabled", "media-query", "class-attribute"],
                    )),
                }
            }
        }

        deserializer.deserialize_any(StrategyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_mode_accepts_canonical_and_legacy() {
        let canonical: GenerationMode = serde_json::from_str("\"just-in-time\"").unwrap();
        let legacy: GenerationMode = serde_json::from_str("\"jit\"").unwrap();
        let full: GenerationMode = serde_json::from_str("\"default\"").unwrap();

        assert_eq!(canonical, GenerationMode::JustInTime);
        assert_eq!(legacy, GenerationMode::JustInTime);
        assert_eq!(full, GenerationMode::Default);
    }

    #[test]
    fn test_dark_mode_accepts_strings() {
        let media: DarkModeStrategy = serde_json::from_str("\"media-query\"").unwrap();
        let class: DarkModeStrategy = serde_json::from_str("\"class\"").unwrap();
        let disabled: DarkModeStrategy = serde_json::from_str("\"disabled\"").unwrap();

        assert_eq!(media, DarkModeStrategy::MediaQuery);
        assert_eq!(class, DarkModeStrategy::ClassAttribute);
        assert_eq!(disabled, DarkModeStrategy::Disabled);
    }

    #[test]
    fn test_dark_mode_accepts_false() {
        let strategy: DarkModeStrategy = serde_json::from_str("false").unwrap();
        assert_eq!(strategy, DarkModeStrategy::Disabled);
    }

    #[test]
    fn test_dark_mode_rejects_true() {
        assert!(serde_json::from_str::<DarkModeStrategy>("true").is_err());
    }

    #[test]
    fn test_dark_mode_rejects_unknown_string() {
        assert!(serde_json::from_str::<DarkModeStrategy>("\"inverted\"").is_err());
    }

    #[test]
    fn test_serialize_round_trip_spellings() {
        assert_eq!(
            serde_json::to_string(&DarkModeStrategy::MediaQuery).unwrap(),
            "\"media-query\""
        );
        assert_eq!(
            serde_json::to_string(&GenerationMode::JustInTime).unwrap(),
            "\"just-in-time\""
        );
    }
}
