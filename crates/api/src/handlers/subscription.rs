use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use drawboard_core::types::DbId;
use drawboard_events::EventKind;

use crate::error::AppResult;
use crate::middleware::auth::MaybeIdentity;
use crate::state::AppState;
use crate::ws::serve_subscription;

/// GET /api/v1/boards/{id}/subscribe/{event}
///
/// Upgrade to a WebSocket streaming one event kind of a board. The
/// subscription is registered before the upgrade completes, so nothing
/// published after this request is accepted is missed.
pub async fn subscribe(
    ws: WebSocketUpgrade,
    MaybeIdentity(identity): MaybeIdentity,
    State(state): State<AppState>,
    Path((board_id, event)): Path<(DbId, String)>,
) -> AppResult<impl IntoResponse> {
    let kind: EventKind = event.parse()?;
    let subscription = state.sync.subscribe(identity.as_ref(), kind, board_id)?;
    let user_id = identity.map(|i| i.user_id);

    Ok(ws.on_upgrade(move |socket| {
        serve_subscription(socket, state.ws_manager, subscription, user_id)
    }))
}
