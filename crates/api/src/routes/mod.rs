pub mod board;
pub mod health;
pub mod layer;
pub mod shape;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /me                                      current user (null when anonymous)
///
/// /boards                                  create (POST)
/// /boards/{id}                             board with layers and shapes
/// /boards/{id}/comments                    page (GET ?first=&after=), add (POST)
/// /boards/{id}/subscribe/{event}           WebSocket feed of one event kind
///
/// /shapes                                  create (POST)
/// /shapes/{id}                             update (PATCH), delete (DELETE)
///
/// /layers/{id}/shapes                      shapes of a layer in draw order
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::me::get_me))
        .nest("/boards", board::router())
        .nest("/shapes", shape::router())
        .nest("/layers", layer::router())
}
