//! Matching keys for identity fields.
//!
//! Plates are compared on their alphanumeric characters only, so
//! `"MH-12 AB 1234"` and `"mh12ab1234"` produce the same key. Chassis
//! numbers only lose their whitespace, which keeps any punctuation that is
//! part of the stamped number.

use regex::Regex;
use std::sync::LazyLock;

/// Everything that is not an ASCII letter or digit.
static NON_ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalizes a plate (or any identifier) for fuzzy matching.
///
/// Strips every character that is not an ASCII letter or digit and
/// uppercases the remainder. Empty input yields an empty string.
#[must_use]
pub fn normalize(input: &str) -> String {
    NON_ALPHANUMERIC_RE
        .replace_all(input, "")
        .to_ascii_uppercase()
}

/// Normalizes a chassis number: removes whitespace and uppercases.
#[must_use]
pub fn normalize_chassis(input: &str) -> String {
    WHITESPACE_RE.replace_all(input, "").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_uppercases() {
        assert_eq!(normalize("MH-12 AB 1234"), "MH12AB1234");
        assert_eq!(normalize("mh12ab1234"), "MH12AB1234");
    }

    #[test]
    fn is_idempotent() {
        for input in ["MH-12 AB 1234", "  ka 05/mx.9921 ", "", "---", "dl3c ÄÖ 77"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize("dl3c ÄÖ 77"), "DL3C77");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" - . "), "");
    }

    #[test]
    fn chassis_keeps_punctuation() {
        assert_eq!(normalize_chassis("abcd 1234-567"), "ABCD1234-567");
        assert_eq!(normalize_chassis("\tMA3 EWD\n"), "MA3EWD");
    }
}
