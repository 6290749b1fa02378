use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use drawboard_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::MaybeIdentity;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/layers/{id}/shapes
pub async fn list_layer_shapes(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Path(layer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let shapes = state.sync.layer_shapes(identity.as_ref(), layer_id).await?;
    Ok(Json(DataResponse { data: shapes }))
}
