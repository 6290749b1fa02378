use axum::routing::get;
use axum::Router;

use crate::handlers::layer;
use crate::state::AppState;

/// Routes mounted at `/layers`.
///
/// ```text
/// GET    /{id}/shapes    -> list_layer_shapes
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/shapes", get(layer::list_layer_shapes))
}
