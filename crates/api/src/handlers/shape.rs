//! Handlers for shape mutations.
//!
//! Each successful mutation is fanned out to the board's subscribers by
//! the synchronization facade before the response is sent.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use drawboard_core::types::DbId;
use drawboard_db::models::shape::{CreateShape, UpdateShape};

use crate::error::AppResult;
use crate::middleware::auth::MaybeIdentity;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/shapes
pub async fn create_shape(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Json(input): Json<CreateShape>,
) -> AppResult<impl IntoResponse> {
    let shape = state.sync.add_shape(identity.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: shape })))
}

/// PATCH /api/v1/shapes/{id}
///
/// `props` is merged into the stored bag; `width`/`height` set to `null`
/// clear the value.
pub async fn update_shape(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Path(shape_id): Path<DbId>,
    Json(input): Json<UpdateShape>,
) -> AppResult<impl IntoResponse> {
    let shape = state
        .sync
        .update_shape(identity.as_ref(), shape_id, input)
        .await?;
    Ok(Json(DataResponse { data: shape }))
}

/// DELETE /api/v1/shapes/{id}
///
/// Responds with the deleted shape's id.
pub async fn delete_shape(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Path(shape_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let id = state.sync.delete_shape(identity.as_ref(), shape_id).await?;
    Ok(Json(DataResponse { data: id }))
}
