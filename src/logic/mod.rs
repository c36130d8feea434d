use rand::Rng;

use crate::{
    data::{Board, Cell, GameStatus},
    error::{GameError, Result},
    model::{GameId, GameParams, Pos, api::GameInfo},
};

pub const DEFAULT_MAX_SIDE: usize = 30;
/// Hard ceiling on board width and height, whatever the configured maximum.
pub const MAX_SIDE_LIMIT: usize = 256;

const HIDDEN: &str = " ";
const TRIGGERED_MINE: &str = "X";
const MINE: &str = "M";

fn validate_params(params: &GameParams, max_side: usize) -> Result<()> {
    let sides = 1..=max_side.min(MAX_SIDE_LIMIT);
    if !sides.contains(&params.width) || !sides.contains(&params.height) {
        return Err(GameError::InvalidDimensions);
    }

    if params.mines < 1 || params.mines >= params.area() {
        return Err(GameError::InvalidMineCount);
    }

    Ok(())
}

/// Selection sampling: each cell in turn becomes a mine with probability
/// `mines_left / cells_left`, which yields exactly `params.mines` mines with
/// every layout equally likely.
fn generate_mines<R: Rng>(params: &GameParams, rng: &mut R) -> Vec<bool> {
    let mut mines = Vec::with_capacity(params.area());

    let mut mines_left = params.mines;
    for cells_left in (1..=params.area()).rev() {
        let value = rng.random_range(0..cells_left) < mines_left;
        mines.push(value);
        if value {
            mines_left -= 1;
        }
    }

    mines
}

/// Flat indices of the up-to-8 cells around `index`, clipped at the edges.
fn neighbors(width: usize, height: usize, index: usize) -> impl Iterator<Item = usize> {
    let (row, col) = (index / width, index % width);
    let rows = row.saturating_sub(1)..=(row + 1).min(height - 1);

    rows.flat_map(move |r| {
        let cols = col.saturating_sub(1)..=(col + 1).min(width - 1);
        cols.map(move |c| r * width + c)
    })
    .filter(move |&adj_index| adj_index != index)
}

impl Board {
    /// Builds a board with randomly placed mines.
    pub fn new(params: GameParams, max_side: usize) -> Result<Self> {
        Self::generate(params, max_side, &mut rand::rng())
    }

    pub fn generate<R: Rng>(params: GameParams, max_side: usize, rng: &mut R) -> Result<Self> {
        validate_params(&params, max_side)?;
        let layout = generate_mines(&params, rng);
        Ok(Self::from_layout(params, layout))
    }

    /// Builds a board with mines at the given positions. Duplicate positions
    /// collapse into one mine.
    pub fn with_mines(
        width: usize,
        height: usize,
        positions: impl IntoIterator<Item = Pos>,
    ) -> Result<Self> {
        let sides = 1..=MAX_SIDE_LIMIT;
        if !sides.contains(&width) || !sides.contains(&height) {
            return Err(GameError::InvalidDimensions);
        }

        let mut layout = vec![false; width * height];
        for pos in positions {
            if pos.row >= height || pos.col >= width {
                return Err(GameError::OutOfBounds);
            }
            layout[pos.row * width + pos.col] = true;
        }

        let mines = layout.iter().filter(|&&mine| mine).count();
        let params = GameParams::new(width, height, mines);
        validate_params(&params, width.max(height))?;
        Ok(Self::from_layout(params, layout))
    }

    fn from_layout(params: GameParams, layout: Vec<bool>) -> Self {
        let cells = (0..layout.len())
            .map(|index| Cell {
                mine: layout[index],
                adjacent: neighbors(params.width, params.height, index)
                    .filter(|&adj_index| layout[adj_index])
                    .count() as u8,
                revealed: false,
            })
            .collect();

        Self {
            width: params.width,
            height: params.height,
            mines: params.mines,
            revealed: 0,
            status: GameStatus::InProgress,
            triggered: None,
            cells,
        }
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.height && pos.col < self.width).then(|| pos.row * self.width + pos.col)
    }

    pub fn has_mine_at(&self, pos: Pos) -> bool {
        self.index_of(pos).is_some_and(|index| self.cells[index].mine)
    }

    pub fn is_revealed(&self, pos: Pos) -> bool {
        self.index_of(pos)
            .is_some_and(|index| self.cells[index].revealed)
    }

    pub fn is_won(&self) -> bool {
        self.width * self.height == self.mines + self.revealed
    }

    /// Applies a move. On failure the board is left untouched.
    pub fn reveal(&mut self, pos: Pos) -> Result<GameStatus> {
        let index = self.index_of(pos).ok_or(GameError::OutOfBounds)?;

        if self.status.is_finished() {
            return Err(GameError::GameAlreadyFinished);
        }

        if self.cells[index].revealed {
            return Err(GameError::CellAlreadyRevealed);
        }

        if self.cells[index].mine {
            self.triggered = Some(index);
            self.status = GameStatus::Lost;
            self.reveal_mines();
            return Ok(self.status);
        }

        self.flood_reveal(index);

        if self.is_won() {
            self.status = GameStatus::Won;
            self.reveal_mines();
        }

        Ok(self.status)
    }

    /// Reveals `start` and, through cells with no adjacent mines, every safe
    /// cell connected to it.
    fn flood_reveal(&mut self, start: usize) {
        let mut stack = vec![start];
        let mut opened = 0;

        while let Some(index) = stack.pop() {
            let cell = &mut self.cells[index];
            if cell.revealed || cell.mine {
                continue;
            }

            cell.revealed = true;
            opened += 1;

            if cell.adjacent == 0 {
                stack.extend(
                    neighbors(self.width, self.height, index)
                        .filter(|&adj_index| !self.cells[adj_index].revealed),
                );
            }
        }

        self.revealed += opened;
    }

    fn reveal_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.mine) {
            cell.revealed = true;
        }
    }

    fn label(&self, index: usize) -> String {
        match self.cells[index] {
            Cell { revealed: false, .. } => HIDDEN.to_string(),
            Cell { mine: true, .. } if self.triggered == Some(index) => TRIGGERED_MINE.to_string(),
            Cell { mine: true, .. } => MINE.to_string(),
            Cell { adjacent, .. } => adjacent.to_string(),
        }
    }

    /// Copies the board into its client-facing form.
    pub fn snapshot(&self, game_id: GameId) -> GameInfo {
        GameInfo {
            game_id,
            width: self.width,
            height: self.height,
            mines_count: self.mines,
            completed: self.status.is_finished(),
            field: (0..self.cells.len())
                .map(|index| self.label(index))
                .collect::<Vec<String>>()
                .chunks(self.width)
                .map(|chunk| chunk.to_vec())
                .collect(),
        }
    }
}
