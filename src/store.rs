use std::sync::Arc;

use dashmap::{DashMap, Entry};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use crate::{
    data::{Board, GameStatus},
    error::{GameError, Result},
    model::{GameId, GameParams, Pos, api::GameInfo},
};

type Session = Arc<Mutex<Board>>;

/// In-memory game sessions. Cloning shares the same sessions.
#[derive(Clone)]
pub struct GameStore {
    games: Arc<DashMap<GameId, Session>>,
    max_side: usize,
}

impl GameStore {
    pub fn new(max_side: usize) -> Self {
        Self {
            games: Arc::new(DashMap::new()),
            max_side,
        }
    }

    pub fn max_side(&self) -> usize {
        self.max_side
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn create_game(&self, params: GameParams) -> Result<GameInfo> {
        let board = Board::new(params, self.max_side).inspect_err(|e| {
            warn!(
                "Rejected game {}x{} with {} mines: {}",
                params.width, params.height, params.mines, e
            )
        })?;
        Ok(self.insert(board))
    }

    /// Stores a prepared board under a fresh id.
    #[instrument(level = "trace", skip(self, board))]
    pub fn insert(&self, board: Board) -> GameInfo {
        loop {
            let id = GameId::random();
            match self.games.entry(id) {
                Entry::Occupied(_) => {
                    debug!("Game ID collision, trying another: {}", id);
                    continue;
                }
                Entry::Vacant(entry) => {
                    let info = board.snapshot(id);
                    entry.insert(Arc::new(Mutex::new(board)));
                    info!(
                        "Created game {}: {}x{} with {} mines ({} active)",
                        id,
                        info.width,
                        info.height,
                        info.mines_count,
                        self.games.len()
                    );
                    return info;
                }
            }
        }
    }

    #[instrument(level = "trace", skip(self), fields(row = pos.row, col = pos.col))]
    pub async fn make_turn(&self, id: &GameId, pos: Pos) -> Result<GameInfo> {
        // The map guard must be dropped before awaiting the session lock.
        let session = match self.games.get(id) {
            None => {
                warn!("Turn for non-existent game: {}", id);
                return Err(GameError::UnknownGameId);
            }
            Some(entry) => entry.value().clone(),
        };

        let mut board = session.lock().await;
        let status = board.reveal(pos).inspect_err(|e| {
            debug!(
                "Rejected reveal at ({}, {}) in game {}: {}",
                pos.row, pos.col, id, e
            )
        })?;

        match status {
            GameStatus::Lost => info!("Game {} lost at ({}, {})", id, pos.row, pos.col),
            GameStatus::Won => info!("Game {} won, all safe cells revealed", id),
            GameStatus::InProgress => debug!(
                "Revealed ({}, {}) in game {}, {} safe cells open",
                pos.row, pos.col, id, board.revealed
            ),
        }

        Ok(board.snapshot(*id))
    }
}
