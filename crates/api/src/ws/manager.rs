use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use drawboard_core::types::{DbId, Timestamp};
use drawboard_events::Topic;
use tokio::sync::{mpsc, RwLock};

/// Channel sender half for pushing control frames to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single subscription socket.
pub struct WsConnection {
    /// Caller identity at upgrade time, if any.
    pub user_id: Option<DbId>,
    /// The board topic this socket streams.
    pub topic: Topic,
    /// Channel for control frames (ping, close) to this connection.
    pub sender: WsSender,
    pub connected_at: Timestamp,
}

/// Tracks every open subscription socket so they can be pinged and closed
/// together.
///
/// Event payloads do not pass through here; each socket reads its own
/// [`Subscription`](drawboard_events::Subscription).
pub struct WsManager {
    connections: RwLock<HashMap<String, WsConnection>>,
}

impl WsManager {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a connection, returning the receiver for its control frames.
    pub async fn add(
        &self,
        conn_id: String,
        user_id: Option<DbId>,
        topic: Topic,
    ) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let conn = WsConnection {
            user_id,
            topic,
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.connections.write().await.insert(conn_id, conn);
        rx
    }

    pub async fn remove(&self, conn_id: &str) {
        self.connections.write().await.remove(conn_id);
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Number of open sockets streaming the given topic.
    pub async fn count_for_topic(&self, topic: Topic) -> usize {
        self.connections
            .read()
            .await
            .values()
            .filter(|c| c.topic == topic)
            .count()
    }

    /// Send a Close frame to every connection, then clear the map.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every connection.
    pub async fn ping_all(&self) {
        let conns = self.connections.read().await;
        for conn in conns.values() {
            let _ = conn.sender.send(Message::Ping(Bytes::new()));
        }
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
