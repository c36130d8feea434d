use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid field size")]
    InvalidDimensions,
    #[error("Invalid number of mines")]
    InvalidMineCount,
    #[error("Invalid game ID")]
    UnknownGameId,
    #[error("Invalid cell position")]
    OutOfBounds,
    #[error("Game is already completed.")]
    GameAlreadyFinished,
    #[error("Cell already revealed.")]
    CellAlreadyRevealed,
}

pub type Result<T> = std::result::Result<T, GameError>;
