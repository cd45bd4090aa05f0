//! The `WordRecognizer` capability and locale tags.

use serde::{Deserialize, Serialize};

/// Language tag for dictionary lookups, e.g. `en` or `en_US`.
///
/// Only the primary language subtag takes part in matching.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// English, the locale games are played in by default.
    #[must_use]
    pub fn english() -> Self {
        Self::new("en")
    }

    /// The full tag as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`en` for `en_US` and `en-GB`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split(['_', '-']).next().unwrap_or_default()
    }

    /// Check whether two locales share a language.
    #[must_use]
    pub fn matches(&self, other: &Locale) -> bool {
        self.language().eq_ignore_ascii_case(other.language())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capability: is `word` a recognized word in `locale`?
///
/// Words passed in are already normalized (trimmed, lowercased).
/// Implementations must be synchronous; validation waits on the answer.
pub trait WordRecognizer {
    /// Check whether the word is recognized.
    fn is_recognized(&self, word: &str, locale: &Locale) -> bool;
}

impl<T: WordRecognizer + ?Sized> WordRecognizer for &T {
    fn is_recognized(&self, word: &str, locale: &Locale) -> bool {
        (**self).is_recognized(word, locale)
    }
}

impl<T: WordRecognizer + ?Sized> WordRecognizer for Box<T> {
    fn is_recognized(&self, word: &str, locale: &Locale) -> bool {
        (**self).is_recognized(word, locale)
    }
}

/// Recognizer backed by a closure.
///
/// ```
/// use word_scramble::dictionary::{FnRecognizer, Locale, WordRecognizer};
///
/// let four_letters = FnRecognizer::new(|word: &str, _: &Locale| word.len() == 4);
/// assert!(four_letters.is_recognized("silk", &Locale::english()));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnRecognizer<F>(F);

impl<F> FnRecognizer<F>
where
    F: Fn(&str, &Locale) -> bool,
{
    /// Wrap a closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> WordRecognizer for FnRecognizer<F>
where
    F: Fn(&str, &Locale) -> bool,
{
    fn is_recognized(&self, word: &str, locale: &Locale) -> bool {
        (self.0)(word, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language() {
        assert_eq!(Locale::new("en_US").language(), "en");
        assert_eq!(Locale::new("en-GB").language(), "en");
        assert_eq!(Locale::new("fi").language(), "fi");
        assert_eq!(Locale::new("").language(), "");
    }

    #[test]
    fn test_matches() {
        let en = Locale::english();
        assert!(en.matches(&Locale::new("en_US")));
        assert!(en.matches(&Locale::new("EN")));
        assert!(!en.matches(&Locale::new("fi")));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default().as_str(), "en");
        assert_eq!(format!("{}", Locale::default()), "en");
    }

    #[test]
    fn test_closure_recognizer() {
        let only_milk = FnRecognizer::new(|word: &str, _: &Locale| word == "milk");
        let en = Locale::english();

        assert!(only_milk.is_recognized("milk", &en));
        assert!(!only_milk.is_recognized("mlik", &en));
    }

    #[test]
    fn test_boxed_recognizer() {
        let boxed: Box<dyn WordRecognizer> = Box::new(FnRecognizer::new(|_: &str, _: &Locale| true));
        assert!(boxed.is_recognized("anything", &Locale::english()));
    }

    #[test]
    fn test_locale_serde() {
        let json = serde_json::to_string(&Locale::new("en_US")).unwrap();
        assert_eq!(json, "\"en_US\"");

        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Locale::new("en_US"));
    }
}
