//! Terminal front end for word scramble.

use anyhow::{Context, Result};
use clap::Parser;
use word_scramble::cli::{self, Cli};
use word_scramble::{WordList, WordScramble, WordSet};

fn init_tracing() -> Result<()> {
    let directives = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(cli::log_filter(directives.as_deref()))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing()?;

    let config = args.into_config().context("Failed to load configuration")?;

    let words = match &config.start_words {
        Some(path) => WordList::from_path(path)
            .with_context(|| format!("Cannot start without a root word list ({})", path.display()))?,
        None => WordList::bundled(),
    };
    let dictionary = WordSet::from_path(&config.dictionary, config.locale.clone())
        .context("Cannot check words without a dictionary; pass --dictionary")?;

    let mut game = WordScramble::new(words, dictionary, &config).context("Failed to start game")?;

    cli::run(&mut game, std::io::stdin().lock(), std::io::stdout().lock())
}
