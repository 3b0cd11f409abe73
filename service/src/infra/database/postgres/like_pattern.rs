//! [`LikePattern`] definition.

use derive_more::{Display, Into};

/// SQL `LIKE` pattern matching any text that contains the provided input.
///
/// Wildcards of the input are escaped, so they match literally.
#[derive(Clone, Debug, Display, Eq, Into, PartialEq)]
pub struct LikePattern(String);

impl LikePattern {
    /// Creates a new [`LikePattern`] matching any text containing the given
    /// `input`.
    #[must_use]
    pub fn contains(input: &str) -> Self {
        Self(format!(
            "%{}%",
            input
                .replace('\\', r"\\")
                .replace('%', r"\%")
                .replace('_', r"\_"),
        ))
    }
}

#[cfg(test)]
mod spec {
    use super::LikePattern;

    #[test]
    fn wraps_input_with_wildcards() {
        assert_eq!(LikePattern::contains("van").to_string(), "%van%");
        assert_eq!(
            LikePattern::contains("Vancouver").to_string(),
            "%Vancouver%",
        );
        assert_eq!(LikePattern::contains("").to_string(), "%%");
    }

    #[test]
    fn escapes_wildcards() {
        assert_eq!(LikePattern::contains("100%").to_string(), r"%100\%%");
        assert_eq!(LikePattern::contains("a_b").to_string(), r"%a\_b%");
        assert_eq!(LikePattern::contains(r"a\b").to_string(), r"%a\\b%");
    }

    #[test]
    fn keeps_case() {
        assert_eq!(LikePattern::contains("VaN").to_string(), "%VaN%");
    }
}
