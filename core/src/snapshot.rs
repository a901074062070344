use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Key of the local storage slot holding the saved game.
pub const STORAGE_KEY: &str = "scrambleGame";

/// Minimal state needed to resume a game in progress.
///
/// The scrambled word is left out on purpose and recomputed when the game is resumed, message and game status are
/// never stored because a snapshot only exists while the game is active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub words: WordPool,
    pub points: u32,
    pub strikes: u32,
    pub passes: u32,
    /// Empty when no round was dealt yet.
    pub current_word: String,
}

impl Snapshot {
    pub const KEY: &'static str = STORAGE_KEY;

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|err| {
            log::debug!("snapshot does not parse: {}", err);
            GameError::MalformedSnapshot
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| GameError::StorageUnavailable)
    }

    /// Checks that the snapshot can belong to an active game played with `config`.
    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        if self.strikes >= config.max_strikes() || self.passes > config.initial_passes() {
            Err(GameError::MalformedSnapshot)
        } else {
            Ok(())
        }
    }
}

/// Single slot the session writes its snapshot to.
pub trait SnapshotStore {
    /// Saved snapshot, `None` when the slot is empty or does not hold a well-formed snapshot.
    fn load(&self) -> Option<Snapshot>;

    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;

    fn clear(&mut self);
}

/// In-memory slot holding the same JSON text a browser would store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with arbitrary text, which does not have to be a valid snapshot.
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self {
            slot: Some(text.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<Snapshot> {
        let text = self.slot.as_deref()?;
        match Snapshot::from_json(text) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("ignoring saved game: {}", err);
                None
            }
        }
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.slot = Some(snapshot.to_json()?);
        Ok(())
    }

    fn clear(&mut self) {
        self.slot = None;
    }
}
