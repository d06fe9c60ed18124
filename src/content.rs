//! Content glob validation and compilation.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ConfigError;

/// Checks that a single pattern compiles as a glob.
pub(crate) fn validate_pattern(pattern: &str) -> Result<(), ConfigError> {
    Glob::new(pattern)
        .map(|_| ())
        .map_err(|err| ConfigError::InvalidContentGlob {
            pattern: pattern.to_string(),
            reason: err.kind().to_string(),
        })
}

/// Compiles an ordered pattern list into a single matcher for the build
/// engine's file scan.
pub(crate) fn build_matcher(patterns: &[String]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|err| ConfigError::InvalidContentGlob {
            pattern: pattern.to_string(),
            reason: err.kind().to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|err| ConfigError::InvalidContentGlob {
        pattern: err.glob().map(|g| g.to_string()).unwrap_or_default(),
        reason: err.kind().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_common_patterns() {
        for pattern in ["src/**/*.html", "templates/*.rs", "**/*.{js,ts}"] {
            assert!(validate_pattern(pattern).is_ok(), "rejected {pattern}");
        }
    }

    #[test]
    fn test_validate_rejects_unclosed_alternates() {
        let err = validate_pattern("src/{unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidContentGlob { .. }));
    }

    #[test]
    fn test_matcher_matches_in_any_pattern() {
        let patterns = vec!["src/**/*.html".to_string(), "lib/**/*.js".to_string()];
        let matcher = build_matcher(&patterns).unwrap();

        assert!(matcher.is_match("src/pages/index.html"));
        assert!(matcher.is_match("lib/util/dates.js"));
        assert!(!matcher.is_match("assets/logo.svg"));
    }
}
