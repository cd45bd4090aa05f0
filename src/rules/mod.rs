//! Candidate validation.
//!
//! A candidate goes through five rules in a fixed order, and the first
//! failure decides the outcome:
//! 1. Longer than 3 characters
//! 2. Not the root word itself
//! 3. Spellable from the root word's letters
//! 4. Not already accepted this session
//! 5. Recognized by the dictionary
//!
//! Validation has no side effects. Recording an accepted word is the
//! caller's job.

pub mod checks;
pub mod engine;
pub mod result;

pub use engine::{validate, Validator};
pub use result::{ErrorKind, Rejection, ValidationResult};
