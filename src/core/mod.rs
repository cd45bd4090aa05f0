//! Core game types: letters, session state, RNG, configuration.
//!
//! Nothing here talks to a dictionary or a UI. Session transitions are pure
//! functions over `SessionState`.

pub mod letters;
pub mod rng;
pub mod config;
pub mod state;

pub use letters::{char_len, normalize, LetterPool};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_DICTIONARY, MIN_WORD_LENGTH};
pub use state::{start_game, SessionState};
