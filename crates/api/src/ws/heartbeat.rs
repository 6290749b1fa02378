use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::ws::manager::WsManager;

/// Default spacing of keep-alive pings to subscription sockets.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// Ping every open subscription socket each `every`, keeping quiet board
/// feeds alive.
///
/// Ticks with no open sockets are skipped and a late tick is delayed, not
/// burst. Runs until aborted through the returned handle.
pub fn start_heartbeat(ws_manager: Arc<WsManager>, every: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let sockets = ws_manager.connection_count().await;
            if sockets == 0 {
                continue;
            }
            tracing::debug!(sockets, "Pinging subscription sockets");
            ws_manager.ping_all().await;
        }
    })
}
