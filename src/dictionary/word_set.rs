//! Word-set dictionary backed by a hash set.
//!
//! The usual source is a newline-delimited word file such as
//! `/usr/share/dict/words`. Entries are stored lowercased, so lookups
//! ignore the case the file uses.

use std::path::Path;

use rustc_hash::FxHashSet;

use super::recognizer::{Locale, WordRecognizer};
use crate::error::{Error, Result};

/// Set of recognized words for one locale.
///
/// ## Example
///
/// ```
/// use word_scramble::dictionary::{Locale, WordRecognizer, WordSet};
///
/// let dict = WordSet::parse("Silk\nworm\nmilk\n", Locale::english());
///
/// assert!(dict.is_recognized("silk", &Locale::english()));
/// assert!(!dict.is_recognized("silks", &Locale::english()));
/// assert!(!dict.is_recognized("silk", &Locale::new("fi")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
    locale: Locale,
}

impl WordSet {
    /// Create an empty word set.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            words: FxHashSet::default(),
            locale,
        }
    }

    /// Build a word set from an iterator of words.
    pub fn from_words<I, S>(words: I, locale: Locale) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(locale);
        for word in words {
            set.insert(word.as_ref());
        }
        set
    }

    /// Parse newline-delimited text, one word per line.
    ///
    /// Lines are trimmed; blank lines are skipped.
    #[must_use]
    pub fn parse(text: &str, locale: Locale) -> Self {
        Self::from_words(text.lines(), locale)
    }

    /// Load a newline-delimited word file.
    ///
    /// # Errors
    ///
    /// Returns `Error::DictionaryIo` if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>, locale: Locale) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::DictionaryIo {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::parse(&text, locale);
        tracing::info!(path = %path.display(), words = set.len(), locale = %set.locale, "loaded dictionary");
        Ok(set)
    }

    /// Add a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    /// Check membership, ignoring case.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Locale the words belong to.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordRecognizer for WordSet {
    fn is_recognized(&self, word: &str, locale: &Locale) -> bool {
        self.locale.matches(locale) && self.contains(word)
    }
}
