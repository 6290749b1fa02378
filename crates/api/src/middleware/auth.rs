//! Identity extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use drawboard_core::authorization::Identity;

use crate::auth::identity::resolve;
use crate::state::AppState;

/// The caller's identity resolved from an `Authorization: Bearer` header.
///
/// Never rejects: a missing, malformed or expired token yields `None` and
/// the authorization gate decides what an anonymous caller may do.
///
/// ```ignore
/// async fn my_handler(
///     MaybeIdentity(identity): MaybeIdentity,
///     State(state): State<AppState>,
/// ) -> AppResult<impl IntoResponse> {
///     let user = state.sync.me(identity.as_ref()).await?;
///     Ok(Json(DataResponse { data: user }))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaybeIdentity(pub Option<Identity>);

impl FromRequestParts<AppState> for MaybeIdentity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        Ok(MaybeIdentity(resolve(header, &state.config.jwt)))
    }
}
