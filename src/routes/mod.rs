use rocket::{Responder, State, post, serde::json::Json};
use tracing::{info, instrument, warn};

use crate::{
    error::GameError,
    model::{
        GameId,
        api::{ErrorResponse, GameInfo, NewGameRequest, TurnRequest},
    },
    store::GameStore,
};

#[derive(Debug, Responder)]
pub enum ApiError {
    #[response(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[response(status = 404)]
    NotFound(Json<ErrorResponse>),
}

impl From<GameError> for ApiError {
    fn from(error: GameError) -> Self {
        let body = Json(ErrorResponse {
            error: error.to_string(),
        });
        match error {
            GameError::UnknownGameId => Self::NotFound(body),
            _ => Self::BadRequest(body),
        }
    }
}

#[post("/new", data = "<request>")]
#[instrument(level = "trace", skip(request, store), fields(width = request.width, height = request.height, mines = request.mines_count))]
pub fn create_game(
    request: Json<NewGameRequest>,
    store: &State<GameStore>,
) -> Result<Json<GameInfo>, ApiError> {
    info!(
        "Game creation request: {}x{} with {} mines",
        request.width, request.height, request.mines_count
    );

    let game = store.create_game(request.params())?;
    Ok(Json(game))
}

#[post("/turn", data = "<request>")]
#[instrument(level = "trace", skip(request, store), fields(game_id = %request.game_id, row = request.row, col = request.col))]
pub async fn make_turn(
    request: Json<TurnRequest>,
    store: &State<GameStore>,
) -> Result<Json<GameInfo>, ApiError> {
    let id = request.game_id.parse::<GameId>().inspect_err(|_| {
        warn!("Turn request with malformed game ID: {:?}", request.game_id)
    })?;

    let game = store.make_turn(&id, request.pos()).await?;
    Ok(Json(game))
}
