use serde::{Deserialize, Serialize};

use super::{GameId, GameParams, Pos};

/// Negative values are treated as far off the board so the engine rejects them
/// with its own error instead of the request failing to parse.
fn saturate(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    pub width: i64,
    pub height: i64,
    pub mines_count: i64,
}

impl NewGameRequest {
    pub fn params(&self) -> GameParams {
        GameParams::new(
            saturate(self.width),
            saturate(self.height),
            saturate(self.mines_count),
        )
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub game_id: String,
    pub row: i64,
    pub col: i64,
}

impl TurnRequest {
    pub fn pos(&self) -> Pos {
        Pos::new(saturate(self.row), saturate(self.col))
    }
}

/// Snapshot of a game as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub game_id: GameId,
    pub width: usize,
    pub height: usize,
    pub mines_count: usize,
    pub completed: bool,
    pub field: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
