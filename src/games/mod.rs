//! Playable games built on the core.
//!
//! - `scramble`: find words hidden in a random root word

pub mod scramble;
