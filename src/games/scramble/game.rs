//! Word scramble game driver.

use crate::core::{start_game, GameConfig, GameRng, GameRngState, SessionState};
use crate::dictionary::{Locale, WordRecognizer};
use crate::error::Result;
use crate::rules::{ValidationResult, Validator};
use crate::words::WordList;

/// Running totals shown alongside the word list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Status {
    /// Accepted words.
    pub word_count: usize,
    /// Characters across accepted words.
    pub letter_total: usize,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Words: {} / Letters: {}", self.word_count, self.letter_total)
    }
}

/// A word scramble game: the current session plus what it takes to run it.
///
/// This is what a front end talks to. It submits raw input, shows the
/// rejection or the updated word list, and calls `restart` on reset.
/// Submissions are handled one at a time, each fully applied before the next.
pub struct WordScramble<R> {
    words: WordList,
    validator: Validator<R>,
    rng: GameRng,
    session: SessionState,
}

impl<R: WordRecognizer> WordScramble<R> {
    /// Create a game and start the first session.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordList` if `words` is empty.
    pub fn new(words: WordList, recognizer: R, config: &GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(words, recognizer, config.locale.clone(), rng)
    }

    /// Create a game drawing root words from an existing RNG.
    ///
    /// Pass `GameRng::from_state(&saved)` to continue the root word sequence
    /// of a game whose [`rng_state`](Self::rng_state) was captured earlier.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordList` if `words` is empty.
    pub fn with_rng(words: WordList, recognizer: R, locale: Locale, mut rng: GameRng) -> Result<Self> {
        let session = start_game(words.as_slice(), &mut rng)?;
        tracing::info!(root = session.root_word(), seed = rng.seed(), "game started");

        Ok(Self {
            words,
            validator: Validator::with_locale(recognizer, locale),
            rng,
            session,
        })
    }

    /// The current session.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// The current root word.
    #[must_use]
    pub fn root_word(&self) -> &str {
        self.session.root_word()
    }

    /// Current totals.
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            word_count: self.session.word_count(),
            letter_total: self.session.letter_total(),
        }
    }

    /// Position in the root word sequence.
    ///
    /// A game built with [`with_rng`](Self::with_rng) from this state draws
    /// the same roots on its following restarts.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// The validator used for submissions.
    #[must_use]
    pub fn validator(&self) -> &Validator<R> {
        &self.validator
    }

    /// Validate raw input and record it if accepted.
    ///
    /// A rejected submission leaves the session unchanged.
    pub fn submit(&mut self, input: &str) -> ValidationResult {
        let result = self.validator.validate(input, &self.session);

        if let ValidationResult::Accepted(word) = &result {
            self.session = self.session.record_word(word.as_str());
            tracing::info!(word = %word, words = self.session.word_count(), "word recorded");
        }

        result
    }

    /// Start over with a new root word and no accepted words.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyWordList` if the word list is empty.
    pub fn restart(&mut self) -> Result<&SessionState> {
        self.session = start_game(self.words.as_slice(), &mut self.rng)?;
        tracing::info!(root = self.session.root_word(), word_pos = %self.rng.state().word_pos, "game reset");
        Ok(&self.session)
    }
}
