#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

pub use engine::*;
pub use error::*;
pub use message::*;
pub use pool::*;
pub use scrambler::*;
pub use session::*;
pub use snapshot::*;

mod engine;
mod error;
mod message;
mod pool;
mod scrambler;
mod session;
mod snapshot;

/// Catalog used when no other word list is configured.
pub const DEFAULT_WORDS: [&str; 10] = [
    "javascript",
    "programming",
    "computer",
    "algorithm",
    "database",
    "network",
    "software",
    "developer",
    "interface",
    "application",
];

/// Rules for one game: how many wrong guesses end it, how many words may be skipped, and which words are played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    max_strikes: u32,
    initial_passes: u32,
    word_catalog: Vec<String>,
}

impl GameConfig {
    pub const DEFAULT_MAX_STRIKES: u32 = 3;
    pub const DEFAULT_INITIAL_PASSES: u32 = 3;

    /// Builds a config from any word list. Words are trimmed and lowercased, blank entries are dropped, and at least
    /// one word has to remain. A strike limit of zero would end every game before it starts, so it is raised to one.
    pub fn new<I, S>(word_catalog: I, max_strikes: u32, initial_passes: u32) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let word_catalog: Vec<String> = word_catalog
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if word_catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        Ok(Self {
            max_strikes: max_strikes.max(1),
            initial_passes,
            word_catalog,
        })
    }

    pub fn with_catalog<I, S>(word_catalog: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            word_catalog,
            Self::DEFAULT_MAX_STRIKES,
            Self::DEFAULT_INITIAL_PASSES,
        )
    }

    pub fn with_max_strikes(mut self, max_strikes: u32) -> Self {
        self.max_strikes = max_strikes.max(1);
        self
    }

    pub fn with_initial_passes(mut self, initial_passes: u32) -> Self {
        self.initial_passes = initial_passes;
        self
    }

    pub fn max_strikes(&self) -> u32 {
        self.max_strikes
    }

    pub fn initial_passes(&self) -> u32 {
        self.initial_passes
    }

    pub fn word_catalog(&self) -> &[String] {
        &self.word_catalog
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_strikes: Self::DEFAULT_MAX_STRIKES,
            initial_passes: Self::DEFAULT_INITIAL_PASSES,
            word_catalog: DEFAULT_WORDS.iter().map(|&word| word.into()).collect(),
        }
    }
}

/// What an accepted guess did. `Won` and `Lost` end the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What an accepted pass did, `Won` when it skipped the last word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PassOutcome {
    Skipped,
    Won,
}

impl PassOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}
