//! Optimal string alignment distance.
//!
//! This is Levenshtein distance with one extra move: swapping two adjacent characters costs a
//! single edit. A substring is never edited again after being transposed, which is what separates
//! it from full Damerau-Levenshtein distance.

/// Longest word, in characters, that is compared exactly.
pub const MAX_WORD_LEN: usize = 63;

/// Distance reported when either word is longer than [`MAX_WORD_LEN`].
pub const MAX_DISTANCE: usize = MAX_WORD_LEN + 1;

const STRIDE: usize = MAX_WORD_LEN + 1;

/// `Workspace` is the scratch matrix for distance computations.
///
/// A workspace is reused across comparisons to avoid an allocation per word pair. It is owned by
/// a single computation at a time; concurrent searches each create their own.
#[derive(Debug, Clone)]
pub struct Workspace {
    table: Vec<usize>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    /// `new` allocates a workspace large enough for two words of [`MAX_WORD_LEN`] characters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: vec![0; STRIDE * STRIDE],
        }
    }

    fn get(&self, i: usize, k: usize) -> usize {
        self.table[i * STRIDE + k]
    }

    fn set(&mut self, i: usize, k: usize, value: usize) {
        self.table[i * STRIDE + k] = value;
    }

    /// `distance` computes the edit distance from `source` to `target`.
    ///
    /// Returns [`MAX_DISTANCE`] without computing anything if either word is longer than
    /// [`MAX_WORD_LEN`] characters.
    ///
    /// # Arguments
    ///
    /// * `source` - The word being corrected.
    /// * `target` - The word it is compared against.
    ///
    /// # Example
    ///
    /// ```
    /// use chatspell::distance::Workspace;
    ///
    /// let mut ws = Workspace::new();
    /// let chars = |s: &str| s.chars().collect::<Vec<_>>();
    /// assert_eq!(ws.distance(&chars("wrold"), &chars("world")), 1);
    /// assert_eq!(ws.distance(&chars("kitten"), &chars("sitting")), 3);
    /// ```
    pub fn distance(&mut self, source: &[char], target: &[char]) -> usize {
        if source.len() > MAX_WORD_LEN || target.len() > MAX_WORD_LEN {
            return MAX_DISTANCE;
        }

        for i in 0..=source.len() {
            self.set(i, 0, i);
        }
        for k in 0..=target.len() {
            self.set(0, k, k);
        }

        for i in 1..=source.len() {
            for k in 1..=target.len() {
                let cost = usize::from(source[i - 1] != target[k - 1]);
                let mut best = (self.get(i - 1, k) + 1)
                    .min(self.get(i, k - 1) + 1)
                    .min(self.get(i - 1, k - 1) + cost);

                if i >= 2
                    && k >= 2
                    && source[i - 1] == target[k - 2]
                    && source[i - 2] == target[k - 1]
                {
                    best = best.min(self.get(i - 2, k - 2) + 1);
                }

                self.set(i, k, best);
            }
        }

        self.get(source.len(), target.len())
    }
}

/// `distance` computes the edit distance between two strings with a fresh [`Workspace`].
///
/// Prefer [`Workspace::distance`] when comparing one word against many.
///
/// # Example
///
/// ```
/// use chatspell::distance::{distance, MAX_DISTANCE};
///
/// assert_eq!(distance("ab", "ba"), 1);
/// assert_eq!(distance(&"a".repeat(64), "a"), MAX_DISTANCE);
/// ```
#[must_use]
pub fn distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();
    Workspace::new().distance(&source, &target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_words() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("world", "world"), 0);
        assert_eq!(distance(&"x".repeat(MAX_WORD_LEN), &"x".repeat(MAX_WORD_LEN)), 0);
    }

    #[test]
    fn empty_words() {
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", "xyz"), 3);
    }

    #[test]
    fn single_edits() {
        assert_eq!(distance("string", "strang"), 1);
        assert_eq!(distance("sting", "string"), 1);
        assert_eq!(distance("string", "sting"), 1);
    }

    #[test]
    fn adjacent_transposition_is_one_edit() {
        assert_eq!(distance("ab", "ba"), 1);
        assert_eq!(distance("recrod", "record"), 1);
        assert_eq!(distance("teh", "the"), 1);
    }

    #[test]
    fn transposed_substring_is_not_edited_again() {
        // Full Damerau-Levenshtein gives 2 here.
        assert_eq!(distance("ca", "abc"), 3);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(distance("naïve", "naive"), 1);
        assert_eq!(distance("日本", "本日"), 1);
    }

    #[test]
    fn symmetric_on_sample_pairs() {
        let pairs = [
            ("ab", "ba"),
            ("ca", "abc"),
            ("kitten", "sitting"),
            ("wrold", "world"),
            ("abcdef", "badcfe"),
            ("", "abc"),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(a, b), distance(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn oversized_words_hit_the_sentinel() {
        let long = "a".repeat(MAX_WORD_LEN + 1);
        assert_eq!(distance(&long, "a"), MAX_DISTANCE);
        assert_eq!(distance("a", &long), MAX_DISTANCE);
        assert_eq!(distance(&long, &long), MAX_DISTANCE);
    }

    #[test]
    fn workspace_is_reusable() {
        let mut ws = Workspace::new();
        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert_eq!(ws.distance(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(ws.distance(&chars("ab"), &chars("ba")), 1);
        assert_eq!(ws.distance(&chars("a"), &chars("a")), 0);
    }
}
