//! Canonical form of question text used for comparison.

use std::sync::LazyLock;

use regex::Regex;

/// Trailing run of decimal digits (any script) mixed with whitespace.
static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d\s]+$").expect("Invalid trailing digits regex"));

/// Normalizes question text for matching.
///
/// - Trims surrounding whitespace
/// - Lowercases (Unicode-aware)
/// - Strips a trailing run of decimal digits, along with any whitespace it
///   exposes
///
/// `"Age2"` and `"age 2"` both become `"age"`. Other numerals such as `²`,
/// `½` or `Ⅻ` are kept. The function is idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    TRAILING_DIGITS.replace(&lowered, "").into_owned()
}
