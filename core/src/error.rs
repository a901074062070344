use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Word catalog has no usable words")]
    EmptyCatalog,
    #[error("No passes left")]
    NoPassesLeft,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Saved game is malformed")]
    MalformedSnapshot,
    #[error("Storage slot is unavailable")]
    StorageUnavailable,
}

pub type Result<T> = core::result::Result<T, GameError>;
