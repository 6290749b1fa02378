//! Handlers for boards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use drawboard_core::types::DbId;
use drawboard_db::models::board::CreateBoard;

use crate::error::AppResult;
use crate::middleware::auth::MaybeIdentity;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/boards
///
/// Create a board with a single "Layer 1", owned by the caller.
pub async fn create_board(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Json(input): Json<CreateBoard>,
) -> AppResult<impl IntoResponse> {
    let board = state.sync.create_board(identity.as_ref(), &input.name).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: board })))
}

/// GET /api/v1/boards/{id}
///
/// Board with its layers and shapes.
pub async fn get_board(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let board = state.sync.board(identity.as_ref(), board_id).await?;
    Ok(Json(DataResponse { data: board }))
}
