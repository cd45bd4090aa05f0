//! Word scramble.
//!
//! - A root word is drawn at random from the word list
//! - The player submits words made from its letters
//! - Each accepted word counts towards the word and letter totals
//! - Reset draws a new root word and clears the history
//!
//! There is no game-over state. A session accepts words until it is reset.

mod game;

pub use game::{Status, WordScramble};
