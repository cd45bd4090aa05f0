//! Session state: one game's root word and accepted words.
//!
//! ## SessionState
//!
//! - Root word (fixed for the session)
//! - Accepted words, most recent first
//! - Derived counters: word count and letter total
//!
//! Transitions are pure. `record_word` returns a new state and leaves the
//! old one untouched, and `start_game` builds a fresh one. The word history
//! is an `im::Vector`, so keeping old states around costs O(1) per step.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::letters::char_len;
use super::rng::GameRng;
use crate::error::{Error, Result};

/// State of one game session.
///
/// Every word in `used_words` passed validation against `root_word` when it
/// was recorded. `record_word` does not re-check this; callers validate first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    root_word: String,

    /// Accepted words, newest at the front.
    used_words: Vector<String>,
}

impl SessionState {
    /// Create a session for a root word with no accepted words.
    #[must_use]
    pub fn new(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into(),
            used_words: Vector::new(),
        }
    }

    /// The word candidates are built from.
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> impl Iterator<Item = &str> {
        self.used_words.iter().map(String::as_str)
    }

    /// Check whether a word was already accepted (exact string match).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.used_words.iter().any(|w| w == word)
    }

    /// Number of accepted words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.used_words.len()
    }

    /// Total characters across all accepted words.
    #[must_use]
    pub fn letter_total(&self) -> usize {
        self.used_words.iter().map(|w| char_len(w)).sum()
    }

    /// Record an accepted word at the front of the history.
    ///
    /// No validation happens here.
    #[must_use]
    pub fn record_word(&self, word: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.used_words.push_front(word.into());
        next
    }
}

/// Start a new session with a root word drawn uniformly from `word_list`.
///
/// # Errors
///
/// Returns `Error::EmptyWordList` if `word_list` is empty.
pub fn start_game<S: AsRef<str>>(word_list: &[S], rng: &mut GameRng) -> Result<SessionState> {
    let root = rng.choose(word_list).ok_or(Error::EmptyWordList)?;
    Ok(SessionState::new(root.as_ref()))
}
