use alloc::string::String;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::*;

/// Whether the game still takes guesses. Only a restart leaves `Won` or `Lost`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Active
    }
}

/// The word being guessed. Only built by dealing, so the scramble always matches the answer.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Round {
    word: String,
    scrambled: String,
}

impl Round {
    fn deal(word: String, rng: &mut SmallRng) -> Self {
        let scrambled = scramble(&word, rng);
        Self { word, scrambled }
    }

    fn is_answer(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.word.to_lowercase()
    }
}

#[derive(Clone, Debug)]
pub struct PlayEngine {
    config: GameConfig,
    pool: WordPool,
    round: Option<Round>,
    points: u32,
    strikes: u32,
    passes: u32,
    state: EngineState,
    message: Option<GameMessage>,
    rng: SmallRng,
}

impl PlayEngine {
    /// Starts a fresh game with the catalog shuffled by a generator seeded from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut engine = Self::blank(config, seed);
        engine.restart();
        engine
    }

    /// Continues a saved game. Snapshots that cannot belong to an active game under `config` are rejected.
    pub fn resume(config: GameConfig, snapshot: Snapshot, seed: u64) -> Result<Self> {
        snapshot.validate(&config)?;

        let Snapshot {
            words,
            points,
            strikes,
            passes,
            current_word,
        } = snapshot;

        let mut engine = Self::blank(config, seed);
        engine.pool = words
            .iter()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();
        engine.points = points;
        engine.strikes = strikes;
        engine.passes = passes;

        let current_word = current_word.trim().to_lowercase();
        if current_word.is_empty() {
            engine.dispatch_next();
        } else {
            engine.round = Some(Round::deal(current_word, &mut engine.rng));
        }

        log::debug!(
            "resumed game: points={} strikes={} passes={} words_left={}",
            engine.points,
            engine.strikes,
            engine.passes,
            engine.pool.len()
        );
        Ok(engine)
    }

    fn blank(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            pool: WordPool::default(),
            round: None,
            points: 0,
            strikes: 0,
            passes: 0,
            state: EngineState::default(),
            message: None,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Resets every counter and deals from a newly shuffled catalog.
    pub fn restart(&mut self) {
        self.points = 0;
        self.strikes = 0;
        self.passes = self.config.initial_passes();
        self.state = EngineState::Active;
        self.message = None;
        self.round = None;
        // the config never holds an empty catalog, an empty pool would only end the game as won
        self.pool =
            WordPool::shuffled(self.config.word_catalog(), &mut self.rng).unwrap_or_default();
        log::debug!("new game with {} words", self.pool.len());
        self.dispatch_next();
    }

    pub fn submit_guess(&mut self, guess: &str) -> Result<GuessOutcome> {
        self.check_active()?;

        let is_correct = self
            .round
            .as_ref()
            .is_some_and(|round| round.is_answer(guess));

        if is_correct {
            self.points = self.points.saturating_add(1);
            self.message = Some(GameMessage::Correct);
            self.dispatch_next();
            Ok(if self.state.is_finished() {
                GuessOutcome::Won
            } else {
                GuessOutcome::Correct
            })
        } else {
            self.strikes = self.strikes.saturating_add(1);
            self.message = Some(GameMessage::Wrong);
            if self.strikes >= self.config.max_strikes() {
                self.end_game(false);
                Ok(GuessOutcome::Lost)
            } else {
                Ok(GuessOutcome::Wrong)
            }
        }
    }

    pub fn pass(&mut self) -> Result<PassOutcome> {
        self.check_active()?;
        if self.passes == 0 {
            return Err(GameError::NoPassesLeft);
        }

        self.passes -= 1;
        self.message = Some(GameMessage::Skipped);
        self.dispatch_next();
        Ok(if self.state.is_finished() {
            PassOutcome::Won
        } else {
            PassOutcome::Skipped
        })
    }

    /// State to save, `None` once the game is over.
    pub fn snapshot(&self) -> Option<Snapshot> {
        if self.state.is_finished() {
            return None;
        }

        Some(Snapshot {
            words: self.pool.clone(),
            points: self.points,
            strikes: self.strikes,
            passes: self.passes,
            current_word: self.current_word().into(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn message(&self) -> Option<GameMessage> {
        self.message
    }

    /// Answer of the last dealt word, still available after the game ends.
    pub fn current_word(&self) -> &str {
        self.round.as_ref().map_or("", |round| round.word.as_str())
    }

    pub fn scrambled_word(&self) -> &str {
        self.round.as_ref().map_or("", |round| round.scrambled.as_str())
    }

    pub fn remaining_words(&self) -> &WordPool {
        &self.pool
    }

    fn dispatch_next(&mut self) {
        match core::mem::take(&mut self.pool).dispatch_next() {
            Dispatch::Next { word, remaining } => {
                self.pool = remaining;
                self.round = Some(Round::deal(word, &mut self.rng));
            }
            Dispatch::Exhausted => self.end_game(true),
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        let points = self.points;
        if won {
            self.state = EngineState::Won;
            self.message = Some(GameMessage::Won { points });
        } else {
            self.state = EngineState::Lost;
            self.message = Some(GameMessage::Lost { points });
        }
        log::debug!("game ended: {:?} with {} points", self.state, points);
    }

    fn check_active(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
