//! Command-line interface and terminal loop for word scramble.
//!
//! The binary parses a [`Cli`], layers it over the JSON config, and hands
//! stdin/stdout to [`run`]. One word per input line; `:reset` draws a new
//! root word, `:quit` (or end of input) exits.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::core::{char_len, GameConfig};
use crate::dictionary::{Locale, WordRecognizer};
use crate::error::Result;
use crate::games::scramble::WordScramble;
use crate::rules::ValidationResult;

/// Words this long or longer are highlighted in the list.
pub const HIGHLIGHT_LENGTH: usize = 5;

/// Word Scramble - make as many words as you can from a random root word
#[derive(Parser, Debug, Default)]
#[command(name = "word-scramble")]
#[command(about = "Make as many words as you can from a random root word")]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root word list (one word per line); defaults to the bundled list
    #[arg(short, long)]
    pub start_words: Option<PathBuf>,

    /// Dictionary word file (one word per line)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,

    /// Seed for drawing root words
    #[arg(long)]
    pub seed: Option<u64>,

    /// Dictionary locale
    #[arg(short, long)]
    pub locale: Option<String>,
}

impl Cli {
    /// Layer command-line flags over the config file (or the defaults).
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the config file cannot be loaded.
    pub fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(path) = self.start_words {
            config = config.with_start_words(path);
        }
        if let Some(path) = self.dictionary {
            config = config.with_dictionary(path);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(locale) = self.locale {
            config = config.with_locale(Locale::new(locale));
        }

        Ok(config)
    }
}

/// Log filter from a `RUST_LOG`-style directive string.
///
/// `warn` applies only when `directives` is absent or sets no level.
#[must_use]
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// One line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Leave the game.
    Quit,
    /// Draw a new root word.
    Reset,
    /// Submit a candidate word.
    Word(&'a str),
}

impl<'a> Input<'a> {
    /// Classify a raw input line.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":quit" => Input::Quit,
            ":reset" => Input::Reset,
            _ => Input::Word(line),
        }
    }
}

/// Render the root word, accepted words (newest first) and totals.
///
/// Each word is prefixed by its length; words of [`HIGHLIGHT_LENGTH`] or
/// more letters are marked with `*`.
#[must_use]
pub fn render_board<R: WordRecognizer>(game: &WordScramble<R>) -> String {
    let mut board = format!("== {} ==\n", game.root_word());
    for word in game.session().used_words() {
        let len = char_len(word);
        let marker = if len >= HIGHLIGHT_LENGTH { '*' } else { ' ' };
        board.push_str(&format!("{marker}({len}) {word}\n"));
    }
    board.push_str(&format!("{}\n", game.status()));
    board
}

/// Play until `:quit` or end of input.
///
/// Rejections are written as `title: message` before the board is redrawn.
///
/// # Errors
///
/// Fails on I/O errors or if a reset cannot draw a root word.
pub fn run<R, I, O>(game: &mut WordScramble<R>, input: I, mut out: O) -> anyhow::Result<()>
where
    R: WordRecognizer,
    I: BufRead,
    O: Write,
{
    write!(out, "\n{}> ", render_board(game))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match Input::parse(&line) {
            Input::Quit => break,
            Input::Reset => {
                game.restart()?;
            }
            Input::Word(word) => {
                if let ValidationResult::Rejected(rejection) = game.submit(word) {
                    writeln!(out, "{}: {}", rejection.title, rejection.message)?;
                }
            }
        }

        write!(out, "\n{}> ", render_board(game))?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
