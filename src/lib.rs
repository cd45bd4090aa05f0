//! # word-scramble
//!
//! Core of a word scramble game: the player gets a random root word and
//! submits shorter words spelled from its letters.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `SessionState` is a value. Recording a word or
//!    starting a game produces a new state; nothing is mutated in place.
//!
//! 2. **Side-Effect-Free Validation**: The validator only reads the session
//!    and asks the dictionary. Rejections carry display text and never touch
//!    state.
//!
//! 3. **Pluggable Dictionary**: Word recognition sits behind
//!    `WordRecognizer`, so a word file, a service, or a test closure can
//!    back it.
//!
//! ## Modules
//!
//! - `core`: Letters, session state, RNG, configuration
//! - `dictionary`: `WordRecognizer` capability and the `WordSet` dictionary
//! - `words`: Root word list
//! - `rules`: Validation rules and outcomes
//! - `games`: The word scramble game driver
//! - `cli`: Command-line flags and the terminal game loop
//! - `error`: Fatal setup errors

pub mod core;
pub mod dictionary;
pub mod words;
pub mod rules;
pub mod games;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameRngState, LetterPool, SessionState,
    normalize, start_game, MIN_WORD_LENGTH,
};

pub use crate::dictionary::{FnRecognizer, Locale, WordRecognizer, WordSet};

pub use crate::words::WordList;

pub use crate::rules::{validate, ErrorKind, Rejection, ValidationResult, Validator};

pub use crate::games::scramble::{Status, WordScramble};

pub use crate::error::{Error, Result};
