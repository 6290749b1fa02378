use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use drawboard_core::types::DbId;
use drawboard_events::Subscription;
use futures::{SinkExt, StreamExt};

use crate::ws::manager::WsManager;

/// Stream one board subscription over an upgraded socket.
///
/// Each event goes out as a JSON text frame. The socket is registered with
/// [`WsManager`] for heartbeat pings and shutdown. When the client goes
/// away the subscription is dropped, which unregisters it from the router.
pub async fn serve_subscription(
    socket: WebSocket,
    ws_manager: Arc<WsManager>,
    mut subscription: Subscription,
    user_id: Option<DbId>,
) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    let topic = subscription.topic();
    tracing::info!(conn_id = %conn_id, %topic, user_id, "Subscription socket connected");

    let mut control = ws_manager.add(conn_id.clone(), user_id, topic).await;
    let (mut sink, mut stream) = socket.split();

    // Sender task: interleave control frames and board events.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        loop {
            let msg = tokio::select! {
                frame = control.recv() => match frame {
                    Some(frame) => frame,
                    None => break,
                },
                event = subscription.next() => match event {
                    Some(event) => match serde_json::to_string(&event) {
                        Ok(text) => Message::Text(text.into()),
                        Err(e) => {
                            tracing::error!(conn_id = %sender_conn_id, error = %e, "Failed to encode event");
                            continue;
                        }
                    },
                    // Router closed the feed.
                    None => Message::Close(None),
                },
            };

            let closing = matches!(msg, Message::Close(_));
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
            if closing {
                break;
            }
        }
    });

    // Receiver loop: clients only send control frames.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, %topic, "Subscription socket disconnected");
}
