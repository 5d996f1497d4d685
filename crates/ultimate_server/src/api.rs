//! REST routes over the shared game engine.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, instrument, warn};
use ultimate_tictactoe::{Board, Engine, Move, MoveError, Player};

/// State shared by every handler.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    engine: Engine,
}

impl AppState {
    /// Wraps an engine constructed at startup.
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Returns the engine handle.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// Query parameters for playing a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveQuery {
    /// Player making the move.
    pub player: Player,
    /// Quadrant index (0-8).
    pub quad_index: usize,
    /// Cell index within the quadrant (0-8).
    pub cell_index: usize,
}

/// Body returned for a rejected request.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

/// A move rejection translated for HTTP clients.
#[derive(Debug, derive_more::Display, derive_more::From)]
#[display("{}", _0)]
pub struct ApiError(MoveError);

impl ApiError {
    /// Returns the underlying move error.
    pub fn kind(&self) -> &MoveError {
        &self.0
    }

    fn status(&self) -> StatusCode {
        match self.0 {
            MoveError::InvariantViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "Engine invariant broken");
        }
        let body = ErrorBody {
            code: self.0.code(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/board",
            get(get_board).put(update_board).delete(restart_board),
        )
        .route("/board/history", get(get_history))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[instrument(skip(state))]
async fn get_board(State(state): State<AppState>) -> Json<Board> {
    Json(state.engine.state())
}

#[instrument(skip(state))]
async fn get_history(State(state): State<AppState>) -> Json<Vec<Move>> {
    Json(state.engine.history())
}

#[instrument(skip(state), fields(player = %query.player, quad = query.quad_index, cell = query.cell_index))]
async fn update_board(
    State(state): State<AppState>,
    Query(query): Query<MoveQuery>,
) -> Result<Json<Board>, ApiError> {
    let board = state
        .engine
        .apply_move(query.player, query.quad_index, query.cell_index)
        .inspect_err(|e| warn!(code = e.code(), "Move rejected"))?;

    info!(status = ?board.status(), next_player = %board.next_player(), "Move accepted");
    Ok(Json(board))
}

#[instrument(skip(state))]
async fn restart_board(State(state): State<AppState>) -> StatusCode {
    state.engine.reset();
    info!("Board restarted");
    StatusCode::NO_CONTENT
}
