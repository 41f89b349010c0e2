//! Shared string helpers for name synthesis.

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters in the Unicode `L` general category (`Lu`, `Ll`, `Lt`, `Lm`,
/// `Lo`) and whitespace. Letter numbers and combining marks do not match.
static LETTERS_AND_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s]*$").expect("valid regex"));

/// Lower-case the first character of a string, leaving the rest untouched
/// (e.g., "IsValid" -> "isValid").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Check that a string consists only of letters and whitespace.
///
/// The empty string passes; callers decide separately whether empty is acceptable.
pub fn is_letters_and_whitespace(s: &str) -> bool {
    LETTERS_AND_WHITESPACE.is_match(s)
}

/// Remove every whitespace character (e.g., "Get Actor Name" -> "GetActorName")
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
