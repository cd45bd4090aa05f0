//! Validation outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a candidate was rejected.
///
/// Variants are listed in the order the rules run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Three characters or fewer.
    TooShort,
    /// Identical to the root word.
    SameAsRoot,
    /// Cannot be spelled from the root word's letters.
    NotDerivable,
    /// Already accepted this session.
    AlreadyUsed,
    /// Not in the dictionary.
    NotAWord,
}

impl ErrorKind {
    /// All kinds, in rule order.
    pub const ALL: [ErrorKind; 5] = [
        ErrorKind::TooShort,
        ErrorKind::SameAsRoot,
        ErrorKind::NotDerivable,
        ErrorKind::AlreadyUsed,
        ErrorKind::NotAWord,
    ];

    /// Short title for display.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            ErrorKind::TooShort => "Word too short",
            ErrorKind::SameAsRoot => "Answer is lame",
            ErrorKind::NotDerivable => "Word not possible",
            ErrorKind::AlreadyUsed => "Word used already",
            ErrorKind::NotAWord => "Word is not recognized",
        }
    }

    /// Explanation for display. Only `NotDerivable` mentions the root word.
    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            ErrorKind::TooShort => "Answer must be greater than 3 characters".to_string(),
            ErrorKind::SameAsRoot => "Be unique, you can't type the same exact word".to_string(),
            ErrorKind::NotDerivable => format!("You can't spell that word from {root_word}"),
            ErrorKind::AlreadyUsed => "Be more original!".to_string(),
            ErrorKind::NotAWord => "You can't just make them up!".to_string(),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A rejected candidate, with the text a UI shows the player.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{title}: {message}")]
pub struct Rejection {
    pub kind: ErrorKind,
    pub title: String,
    pub message: String,
}

impl Rejection {
    /// Build the rejection for a kind, filling in the display text.
    #[must_use]
    pub fn new(kind: ErrorKind, root_word: &str) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            message: kind.message(root_word),
        }
    }
}

/// Outcome of validating one candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// Passed every rule. Carries the normalized word.
    Accepted(String),
    /// Failed a rule.
    Rejected(Rejection),
}

impl ValidationResult {
    /// Check if the candidate was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    /// The accepted word, if any.
    #[must_use]
    pub fn accepted_word(&self) -> Option<&str> {
        match self {
            ValidationResult::Accepted(word) => Some(word),
            ValidationResult::Rejected(_) => None,
        }
    }

    /// The rejection kind, if rejected.
    #[must_use]
    pub fn rejection_kind(&self) -> Option<ErrorKind> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(rejection) => Some(rejection.kind),
        }
    }

    /// Convert into a `Result` for `?`-style handling.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` if the candidate was rejected.
    pub fn into_result(self) -> Result<String, Rejection> {
        match self {
            ValidationResult::Accepted(word) => Ok(word),
            ValidationResult::Rejected(rejection) => Err(rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_are_distinct() {
        let titles: std::collections::HashSet<_> = ErrorKind::ALL.iter().map(|k| k.title()).collect();
        assert_eq!(titles.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn test_not_derivable_names_root() {
        let rejection = Rejection::new(ErrorKind::NotDerivable, "silkworm");

        assert_eq!(rejection.title, "Word not possible");
        assert_eq!(rejection.message, "You can't spell that word from silkworm");
    }

    #[test]
    fn test_too_short_message() {
        let rejection = Rejection::new(ErrorKind::TooShort, "silkworm");
        assert_eq!(rejection.message, "Answer must be greater than 3 characters");
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection::new(ErrorKind::AlreadyUsed, "silkworm");
        assert_eq!(rejection.to_string(), "Word used already: Be more original!");
    }

    #[test]
    fn test_result_accessors() {
        let accepted = ValidationResult::Accepted("silk".to_string());
        assert!(accepted.is_accepted());
        assert_eq!(accepted.accepted_word(), Some("silk"));
        assert_eq!(accepted.rejection_kind(), None);

        let rejected = ValidationResult::Rejected(Rejection::new(ErrorKind::NotAWord, "silkworm"));
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.accepted_word(), None);
        assert_eq!(rejected.rejection_kind(), Some(ErrorKind::NotAWord));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationResult::Accepted("silk".into()).into_result(), Ok("silk".to_string()));

        let err = ValidationResult::Rejected(Rejection::new(ErrorKind::TooShort, "silkworm"))
            .into_result()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TooShort);
    }
}
