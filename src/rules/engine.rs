//! The validator: runs the rules against a candidate.
//!
//! ## Rule Order
//!
//! Rules run in a fixed order and stop at the first failure, so a word that
//! is both too short and unspellable is reported as `TooShort`. The
//! dictionary is consulted last and only for words that passed every local
//! rule.

use crate::core::{normalize, SessionState};
use crate::dictionary::{Locale, WordRecognizer};

use super::checks;
use super::result::{ErrorKind, Rejection, ValidationResult};

/// Candidate validator bound to a dictionary.
///
/// ## Example
///
/// ```
/// use word_scramble::core::SessionState;
/// use word_scramble::dictionary::{Locale, WordSet};
/// use word_scramble::rules::{ErrorKind, ValidationResult, Validator};
///
/// let dict = WordSet::parse("silk\nworm\nmilk\n", Locale::english());
/// let validator = Validator::new(dict);
/// let state = SessionState::new("silkworm");
///
/// assert_eq!(validator.validate(" Silk ", &state), ValidationResult::Accepted("silk".into()));
/// assert_eq!(validator.validate("silks", &state).rejection_kind(), Some(ErrorKind::NotDerivable));
/// ```
#[derive(Clone, Debug)]
pub struct Validator<R> {
    recognizer: R,
    locale: Locale,
}

impl<R: WordRecognizer> Validator<R> {
    /// Create a validator that looks words up in English.
    pub fn new(recognizer: R) -> Self {
        Self::with_locale(recognizer, Locale::english())
    }

    /// Create a validator for a specific locale.
    pub fn with_locale(recognizer: R, locale: Locale) -> Self {
        Self { recognizer, locale }
    }

    /// Locale used for dictionary lookups.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The dictionary this validator consults.
    #[must_use]
    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Validate a raw candidate against the session.
    ///
    /// The candidate is normalized first. Neither the state nor the
    /// validator is modified.
    #[must_use]
    pub fn validate(&self, candidate: &str, state: &SessionState) -> ValidationResult {
        let word = normalize(candidate);

        match self.first_failure(&word, state) {
            None => {
                tracing::debug!(word = %word, root = state.root_word(), "candidate accepted");
                ValidationResult::Accepted(word)
            }
            Some(kind) => {
                tracing::debug!(word = %word, root = state.root_word(), reason = ?kind, "candidate rejected");
                ValidationResult::Rejected(Rejection::new(kind, state.root_word()))
            }
        }
    }

    fn first_failure(&self, word: &str, state: &SessionState) -> Option<ErrorKind> {
        if !checks::meets_min_length(word) {
            return Some(ErrorKind::TooShort);
        }
        if !checks::differs_from_root(word, state) {
            return Some(ErrorKind::SameAsRoot);
        }
        if !checks::is_derivable(word, state) {
            return Some(ErrorKind::NotDerivable);
        }
        if !checks::is_original(word, state) {
            return Some(ErrorKind::AlreadyUsed);
        }
        if !self.recognizer.is_recognized(word, &self.locale) {
            return Some(ErrorKind::NotAWord);
        }
        None
    }
}

/// Validate a candidate using an English dictionary lookup.
#[must_use]
pub fn validate<R: WordRecognizer>(candidate: &str, state: &SessionState, recognizer: R) -> ValidationResult {
    Validator::new(recognizer).validate(candidate, state)
}
