//! Root word source.
//!
//! A game draws its root word from a newline-delimited list. The default
//! list ships inside the binary; a different file can be supplied at startup.

pub mod list;

pub use list::WordList;
