//! Nearest-match search over a dictionary.

use crate::dictionary::Dictionary;
use crate::distance::{Workspace, MAX_DISTANCE};

/// `Check` is the result of looking a word up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Smallest edit distance to any dictionary word, or [`MAX_DISTANCE`] if nothing matched.
    pub distance: usize,
    /// Every dictionary word at that distance, in dictionary order.
    pub matches: Vec<String>,
}

impl Check {
    /// Whether the word was found in the dictionary as is.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.distance == 0
    }
}

/// `Spellchecker` is the capability the command layer needs from a spelling engine.
pub trait Spellchecker: Send + Sync {
    /// Finds the closest dictionary words to `word`.
    fn check(&self, word: &str) -> Check;

    /// Tests `word` for an exact dictionary entry.
    fn is_valid(&self, word: &str) -> bool;

    /// Edit distance between two words.
    fn distance(&self, source: &str, target: &str) -> usize;
}

/// `EditDistance` suggests the dictionary words with the smallest edit distance.
#[derive(Debug, Clone, Default)]
pub struct EditDistance {
    dictionary: Dictionary,
}

impl EditDistance {
    /// `new` creates a checker over `dictionary`.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary searched by this checker.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Scans the whole dictionary. With `prune`, candidates whose length alone puts them further
    /// away than the best distance so far are skipped; the result is the same either way.
    fn nearest(&self, word: &str, prune: bool) -> Check {
        let query: Vec<char> = word.chars().collect();
        let mut workspace = Workspace::new();
        let mut best = MAX_DISTANCE;
        let mut matches = Vec::new();

        for candidate in self.dictionary.words() {
            if prune && query.len().abs_diff(candidate.len()) > best {
                continue;
            }

            let dist = workspace.distance(&query, candidate.chars());
            if dist >= MAX_DISTANCE {
                continue;
            }
            if dist < best {
                best = dist;
                matches.clear();
            }
            if dist == best {
                matches.push(candidate.as_str().to_string());
            }
        }

        log::trace!("{word:?}: distance {best}, {} matches", matches.len());
        Check {
            distance: best,
            matches,
        }
    }
}

impl Spellchecker for EditDistance {
    /// # Example
    ///
    /// ```
    /// use chatspell::{Dictionary, EditDistance, Spellchecker};
    ///
    /// let checker = EditDistance::new(Dictionary::from_lines(["world", "word", "would"]));
    /// let check = checker.check("wrold");
    /// assert_eq!(check.distance, 1);
    /// assert_eq!(check.matches, vec!["world"]);
    /// ```
    fn check(&self, word: &str) -> Check {
        if self.is_valid(word) {
            return Check {
                distance: 0,
                matches: vec![word.to_string()],
            };
        }
        self.nearest(word, true)
    }

    fn is_valid(&self, word: &str) -> bool {
        self.dictionary.is_valid(word)
    }

    fn distance(&self, source: &str, target: &str) -> usize {
        crate::distance::distance(source, target)
    }
}
