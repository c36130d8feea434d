#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub mine: bool,
    pub adjacent: u8,
    pub revealed: bool,
}

/// Grid state of a single game, stored row-major.
#[derive(Debug, Clone)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    /// Safe cells revealed so far. Mines shown after the game ends are not counted.
    pub revealed: usize,
    pub status: GameStatus,
    pub triggered: Option<usize>,
    pub cells: Vec<Cell>,
}
