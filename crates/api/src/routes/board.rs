//! Route definitions for the `/boards` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{board, comment, subscription};
use crate::state::AppState;

/// Routes mounted at `/boards`.
///
/// ```text
/// POST   /                          -> create_board
/// GET    /{id}                      -> get_board
/// GET    /{id}/comments             -> list_comments (?first=&after=)
/// POST   /{id}/comments             -> add_comment
/// GET    /{id}/subscribe/{event}    -> subscribe (WebSocket upgrade)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(board::create_board))
        .route("/{id}", get(board::get_board))
        .route(
            "/{id}/comments",
            get(comment::list_comments).post(comment::add_comment),
        )
        .route("/{id}/subscribe/{event}", get(subscription::subscribe))
}
