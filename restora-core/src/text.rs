//! Post-processing of recognized text

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // word, hyphen, line break, lowercase continuation (Turkish letters included)
    static ref HYPHENATED_BREAK: Regex =
        Regex::new(r"(\w+)-\s*\n\s*([a-zğüşıöç]+)").expect("hyphenation pattern is valid");
}

/// Join words that the scan split across lines with a trailing hyphen.
///
/// Only continuations starting with a lowercase letter are joined, so
/// hyphenated proper nouns and list dashes survive.
pub fn join_hyphenated_lines(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    HYPHENATED_BREAK.replace_all(text, "$1$2").into_owned()
}
