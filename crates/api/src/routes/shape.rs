//! Route definitions for the `/shapes` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::shape;
use crate::state::AppState;

/// Routes mounted at `/shapes`.
///
/// ```text
/// POST   /        -> create_shape
/// PATCH  /{id}    -> update_shape
/// DELETE /{id}    -> delete_shape
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(shape::create_shape))
        .route(
            "/{id}",
            patch(shape::update_shape).delete(shape::delete_shape),
        )
}
