//! Game configuration.
//!
//! `GameConfig` says where words come from and how root words are drawn:
//! - `locale`: language passed to the dictionary
//! - `seed`: fixed RNG seed, or `None` for a fresh one each run
//! - `start_words`: root word list file, or `None` for the bundled list
//! - `dictionary`: dictionary word file
//!
//! Configs can be built in code or loaded from JSON. Missing JSON fields
//! take their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dictionary::Locale;
use crate::error::{Error, Result};

/// Shortest word accepted: candidates must be longer than 3 characters.
pub const MIN_WORD_LENGTH: usize = 4;

/// Dictionary used when none is configured.
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Locale for dictionary lookups.
    pub locale: Locale,

    /// Seed for drawing root words. `None` seeds from the OS.
    pub seed: Option<u64>,

    /// Root word list file. `None` uses the bundled list.
    pub start_words: Option<PathBuf>,

    /// Dictionary word file.
    pub dictionary: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            locale: Locale::english(),
            seed: None,
            start_words: None,
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| Error::Config {
            path: path.to_path_buf(),
            reason,
        };

        let text = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))
    }

    /// Set the dictionary locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read root words from a file instead of the bundled list.
    #[must_use]
    pub fn with_start_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.start_words = Some(path.into());
        self
    }

    /// Use a different dictionary file.
    #[must_use]
    pub fn with_dictionary(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.locale, Locale::english());
        assert_eq!(config.seed, None);
        assert_eq!(config.start_words, None);
        assert_eq!(config.dictionary, PathBuf::from(DEFAULT_DICTIONARY));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_locale(Locale::new("en_GB"))
            .with_seed(7)
            .with_start_words("start.txt")
            .with_dictionary("words.txt");

        assert_eq!(config.locale.as_str(), "en_GB");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.start_words, Some(PathBuf::from("start.txt")));
        assert_eq!(config.dictionary, PathBuf::from("words.txt"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{ "seed": 12 }"#).unwrap();

        assert_eq!(config.seed, Some(12));
        assert_eq!(config.locale, Locale::english());
        assert_eq!(config.dictionary, PathBuf::from(DEFAULT_DICTIONARY));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig::new().with_seed(3).with_start_words("words/start.txt");

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, back);
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = GameConfig::from_json_file("/nonexistent/config.json");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
