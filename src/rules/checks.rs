//! The local rule predicates.
//!
//! Each takes an already-normalized candidate and returns true when the rule
//! passes. The dictionary rule lives in the validator since it needs a
//! `WordRecognizer`.

use crate::core::{char_len, LetterPool, SessionState, MIN_WORD_LENGTH};

/// Longer than 3 characters.
#[must_use]
pub fn meets_min_length(word: &str) -> bool {
    char_len(word) >= MIN_WORD_LENGTH
}

/// Not identical to the root word.
#[must_use]
pub fn differs_from_root(word: &str, state: &SessionState) -> bool {
    word != state.root_word()
}

/// Spellable from the root word, each root letter used at most once.
#[must_use]
pub fn is_derivable(word: &str, state: &SessionState) -> bool {
    LetterPool::spells(state.root_word(), word)
}

/// Not accepted earlier in this session.
#[must_use]
pub fn is_original(word: &str, state: &SessionState) -> bool {
    !state.contains(word)
}
