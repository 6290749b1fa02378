use std::sync::Arc;

use crate::config::ServerConfig;
use crate::sync::SyncFacade;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Board operations, persistence and live fan-out.
    pub sync: Arc<SyncFacade>,
    pub config: Arc<ServerConfig>,
    /// Open subscription sockets.
    pub ws_manager: Arc<WsManager>,
}
