//! Dictionary lookup: deciding whether a candidate is a real word.
//!
//! The validator never owns a word corpus. It asks a `WordRecognizer`,
//! which can be a local word set, a networked service, or a closure wrapped
//! in `FnRecognizer`.

pub mod recognizer;
pub mod word_set;

pub use recognizer::{FnRecognizer, Locale, WordRecognizer};
pub use word_set::WordSet;
