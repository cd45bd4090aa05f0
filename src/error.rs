//! Fatal errors: everything that stops a game from starting.
//!
//! Player mistakes are not errors in this sense. They come back from the
//! validator as [`crate::rules::Rejection`] values and leave the session as it was.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up or restarting a game.
#[derive(Debug, Error)]
pub enum Error {
    /// The root word list has no usable entries.
    #[error("root word list is empty")]
    EmptyWordList,

    /// The root word list could not be read.
    #[error("could not load root word list from {}", path.display())]
    WordListIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary could not be read.
    #[error("could not load dictionary from {}", path.display())]
    DictionaryIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read or parsed.
    #[error("invalid configuration in {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

/// Result alias for fallible game setup.
pub type Result<T> = std::result::Result<T, Error>;
