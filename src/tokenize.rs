//! Splitting chat text into words that can be spellchecked.

use std::sync::LazyLock;

use regex::Regex;

/// Characters removed from a token before it is checked.
pub const STRIPPED_PUNCTUATION: &[char] = &[',', '.', '!', '?', '<', '>', '[', ']', '"'];

// SAFETY: The pattern is a literal that is covered by the tests below
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").unwrap());

/// `is_link` reports whether `token` looks like a URL (`scheme://...`).
///
/// # Example
///
/// ```
/// use chatspell::tokenize::is_link;
///
/// assert!(is_link("https://example.org/a?b=c"));
/// assert!(!is_link("example.org"));
/// ```
#[must_use]
pub fn is_link(token: &str) -> bool {
    LINK.is_match(token)
}

/// `normalize` lower-cases the first character of `word` and leaves the rest alone.
///
/// Chat text mostly differs from dictionary entries by a capitalised first letter, so this is
/// the only case folding applied on either side.
///
/// # Example
///
/// ```
/// use chatspell::tokenize::normalize;
///
/// assert_eq!(normalize("Hello"), "hello");
/// assert_eq!(normalize("NASA"), "nASA");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `strip_punctuation` drops every character of [`STRIPPED_PUNCTUATION`] from `text`.
#[must_use]
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// `tokenize` turns a raw chat message into the words to check.
///
/// Tokens are split on whitespace. Links are kept verbatim; every other token has its
/// punctuation stripped and its first character lower-cased. Tokens left empty are dropped.
///
/// # Example
///
/// ```
/// use chatspell::tokenize::tokenize;
///
/// assert_eq!(
///     tokenize("Hello, wrold! see <https://example.org>"),
///     vec!["hello", "wrold", "see", "<https://example.org>"],
/// );
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|token| {
            if is_link(token) {
                return Some(token.to_string());
            }
            let stripped = strip_punctuation(token);
            (!stripped.is_empty()).then(|| normalize(&stripped))
        })
        .collect()
}
