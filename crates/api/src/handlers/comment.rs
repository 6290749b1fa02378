//! Handlers for board comments.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use drawboard_core::types::DbId;
use drawboard_db::models::comment::CreateComment;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::MaybeIdentity;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for comment pages.
#[derive(Debug, Deserialize)]
pub struct CommentPageParams {
    pub first: Option<i64>,
    pub after: Option<String>,
}

/// GET /api/v1/boards/{id}/comments?first=&after=
pub async fn list_comments(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
    Query(params): Query<CommentPageParams>,
) -> AppResult<impl IntoResponse> {
    let page = state
        .sync
        .comments(identity.as_ref(), board_id, params.first, params.after.as_deref())
        .await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /api/v1/boards/{id}/comments
pub async fn add_comment(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Path(board_id): Path<DbId>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let comment = state
        .sync
        .add_comment(identity.as_ref(), board_id, &input.body)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
