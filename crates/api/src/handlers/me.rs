use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::MaybeIdentity;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/me
///
/// The caller's user record; `data` is `null` for anonymous callers.
pub async fn get_me(
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = state.sync.me(identity.as_ref()).await?;
    Ok(Json(DataResponse { data: user }))
}
