//! The root word list.

use std::path::Path;

use crate::core::GameRng;
use crate::error::{Error, Result};

/// Start words compiled into the binary.
const BUNDLED: &str = include_str!("../../assets/start.txt");

/// Candidate root words, one per line of the source text.
///
/// Lines are trimmed and blank lines dropped, so a trailing newline or a
/// `\r\n` file never yields an empty root word. Words keep the case the list
/// gives them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse newline-delimited text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines().collect()
    }

    /// The list shipped with the game.
    #[must_use]
    pub fn bundled() -> Self {
        Self::parse(BUNDLED)
    }

    /// Load a list from a file.
    ///
    /// # Errors
    ///
    /// - `Error::WordListIo` if the file cannot be read.
    /// - `Error::EmptyWordList` if it contains no words.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::WordListIo {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&text);
        if list.is_empty() {
            return Err(Error::EmptyWordList);
        }

        tracing::info!(path = %path.display(), words = list.len(), "loaded root word list");
        Ok(list)
    }

    /// Pick a word uniformly at random.
    ///
    /// Returns `None` if the list is empty.
    pub fn choose(&self, rng: &mut GameRng) -> Option<&str> {
        rng.choose(&self.words).map(String::as_str)
    }

    /// All words in file order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Collects with the same trimming and blank-dropping as [`WordList::parse`].
impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().trim().to_string())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let list = WordList::parse("silkworm\nnotebook\n");
        assert_eq!(list.as_slice(), &["silkworm".to_string(), "notebook".to_string()]);
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let list = WordList::parse("silkworm\r\n\n  elephant \n\n");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["silkworm", "elephant"]);
    }

    #[test]
    fn test_parse_keeps_case() {
        let list = WordList::parse("Silkworm\n");
        assert_eq!(list.iter().next(), Some("Silkworm"));
    }

    #[test]
    fn test_bundled_is_usable() {
        let list = WordList::bundled();

        assert!(!list.is_empty());
        assert!(list.iter().all(|w| w.len() > 3 && w == w.to_lowercase()));
        assert!(list.iter().any(|w| w == "silkworm"));
    }

    #[test]
    fn test_choose() {
        let list = WordList::parse("silkworm\nnotebook\nelephant");
        let mut rng = GameRng::new(42);

        let word = list.choose(&mut rng).unwrap();
        assert!(list.iter().any(|w| w == word));

        assert!(WordList::default().choose(&mut rng).is_none());
    }

    #[test]
    fn test_from_iter() {
        let list: WordList = ["silkworm", "notebook"].into_iter().collect();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_from_iter_drops_blank_entries() {
        let list: WordList = ["", " silkworm\r", "   "].into_iter().collect();
        assert_eq!(list.as_slice(), &["silkworm".to_string()]);

        let blank: WordList = ["", ""].into_iter().collect();
        assert!(blank.is_empty());
        assert!(blank.choose(&mut GameRng::new(1)).is_none());
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = WordList::from_path("/nonexistent/start.txt");
        assert!(matches!(result, Err(Error::WordListIo { .. })));
    }
}
