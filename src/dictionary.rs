//! The list of known-correct words.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;

use crate::tokenize::normalize;

/// `Word` is a dictionary entry, kept both as text and as characters for distance computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

impl Word {
    /// `new` creates a `Word` from already-normalized text.
    #[must_use]
    pub fn new(text: String) -> Self {
        let chars = text.chars().collect();
        Self { text, chars }
    }

    /// The word as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The word as characters.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the word has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// `Dictionary` is an immutable word list with an exact-membership index.
///
/// Entries keep file order, which is also the order tied suggestions are reported in. Every entry
/// has its first character lower-cased, the same normalization applied to chat tokens.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: HashSet<String>,
}

impl Dictionary {
    /// `from_lines` builds a dictionary from one word per item.
    ///
    /// Trailing whitespace is trimmed, blank lines are skipped and repeated entries keep only
    /// their first occurrence.
    ///
    /// # Example
    ///
    /// ```
    /// use chatspell::Dictionary;
    ///
    /// let dict = Dictionary::from_lines(["Hello", "world", "", "hello"]);
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.is_valid("hello"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = HashSet::new();

        for line in lines {
            let line = line.as_ref().trim_end();
            if line.is_empty() {
                continue;
            }
            let text = normalize(line);
            if index.insert(text.clone()) {
                words.push(Word::new(text));
            }
        }

        Self { words, index }
    }

    /// `load` reads a dictionary file with one word per line.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    ///
    /// # Example
    ///
    /// ```
    /// use chatspell::Dictionary;
    ///
    /// fn main() -> Result<(), anyhow::Error> {
    ///     let dict = Dictionary::load("data/words.txt")?;
    ///     assert!(dict.is_valid("world"));
    ///     Ok(())
    /// }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading dictionary {}", path.display()))?;
        let dict = Self::from_lines(text.lines());
        log::info!("loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// `load_or_empty` is [`Dictionary::load`], falling back to an empty dictionary on failure.
    ///
    /// Spellchecking against an empty dictionary reports no matches instead of failing.
    #[must_use]
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("{err:#}; spellchecking with an empty dictionary");
            Self::default()
        })
    }

    /// `is_valid` tests whether `word` is an exact dictionary entry.
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Entries in file order.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn texts(dict: &Dictionary) -> Vec<&str> {
        dict.words().iter().map(Word::as_str).collect()
    }

    #[test]
    fn keeps_file_order_and_normalizes_first_letter() {
        let dict = Dictionary::from_lines(["Zebra", "apple", "McDonald"]);
        assert_eq!(texts(&dict), vec!["zebra", "apple", "mcDonald"]);
        assert!(dict.is_valid("zebra"));
        assert!(!dict.is_valid("Zebra"));
        assert!(dict.is_valid("mcDonald"));
    }

    #[test]
    fn sequence_and_index_agree() {
        let dict = Dictionary::from_lines(["a", "b  ", "\t", "A", "b"]);
        assert_eq!(texts(&dict), vec!["a", "b"]);
        for word in dict.words() {
            assert!(dict.is_valid(word.as_str()));
        }
        assert_eq!(dict.index.len(), dict.len());
    }

    #[test]
    fn loads_from_disk_with_crlf_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello\r\nworld\r\n").unwrap();
        let dict = Dictionary::load(file.path()).unwrap();
        assert_eq!(texts(&dict), vec!["hello", "world"]);
    }

    #[test]
    fn missing_file_is_an_error_for_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = Dictionary::load(dir.path().join("nope.txt")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dict = Dictionary::load_or_empty(dir.path().join("nope.txt"));
        assert!(dict.is_empty());
        assert!(!dict.is_valid("anything"));
    }

    #[test]
    fn word_lengths_count_characters() {
        let word = Word::new("naïve".to_string());
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }
}
