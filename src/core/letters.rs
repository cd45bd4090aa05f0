//! Letter handling: candidate normalization and the root-word letter pool.
//!
//! ## Derivability
//!
//! A candidate is derivable from a root word when its letters form a
//! sub-multiset of the root's letters. `LetterPool` checks this the direct
//! way: start from the root's letters, remove one matching letter per
//! candidate letter, and fail on the first letter that has no match.
//!
//! ```
//! use word_scramble::core::LetterPool;
//!
//! assert!(LetterPool::spells("silkworm", "worm"));
//! assert!(!LetterPool::spells("silkworm", "silks")); // only one 's'
//! ```

use smallvec::SmallVec;

/// Normalize raw player input.
///
/// Strips leading/trailing whitespace (including newlines), then lowercases.
/// Applying it twice gives the same result as applying it once.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of characters in a word, as counted by the length rule.
///
/// Counts Unicode scalar values, not grapheme clusters: a precomposed
/// `é` counts as one, `e` followed by a combining accent as two. Root word
/// lists and dictionaries are plain lowercase ASCII in practice, where the
/// two agree.
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Working copy of a root word's letters.
///
/// Root words are short, so the letters live inline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterPool {
    letters: SmallVec<[char; 16]>,
}

impl LetterPool {
    /// Build a pool from a root word, exactly as given (no case folding).
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            letters: root.chars().collect(),
        }
    }

    /// Remove one occurrence of `letter`.
    ///
    /// Returns false if the pool has no such letter left.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Letters still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.letters.len()
    }

    /// Check whether `word` can be spelled from `root`, each root letter
    /// used at most once.
    #[must_use]
    pub fn spells(root: &str, word: &str) -> bool {
        let mut pool = Self::new(root);
        word.chars().all(|letter| pool.take(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(" Silk "), "silk");
        assert_eq!(normalize("\tWORM\n"), "worm");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("  MiLk\r\n");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        assert_eq!(char_len("silk"), 4);
        assert_eq!(char_len("caf\u{e9}"), 4);
        assert_eq!(char_len("cafe\u{301}"), 5);
    }

    #[test]
    fn test_take() {
        let mut pool = LetterPool::new("moss");
        assert!(pool.take('s'));
        assert!(pool.take('s'));
        assert!(!pool.take('s'));
        assert_eq!(pool.remaining(), 2);
    }

    #[test]
    fn test_spells() {
        assert!(LetterPool::spells("silkworm", "silk"));
        assert!(LetterPool::spells("silkworm", "milk"));
        assert!(LetterPool::spells("silkworm", "silkworm"));
        assert!(!LetterPool::spells("silkworm", "silks"));
        assert!(!LetterPool::spells("silkworm", "cat"));
    }

    #[test]
    fn test_spells_empty_word() {
        assert!(LetterPool::spells("silkworm", ""));
        assert!(!LetterPool::spells("", "a"));
    }

    #[test]
    fn test_root_case_is_not_folded() {
        assert!(!LetterPool::spells("Silkworm", "silk"));
        assert!(LetterPool::spells("Silkworm", "ilk"));
    }
}
