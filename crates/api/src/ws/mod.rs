//! WebSocket infrastructure for live board subscriptions.
//!
//! Provides connection tracking, heartbeat pings, and the per-socket loop
//! that streams a [`Subscription`](drawboard_events::Subscription).

mod heartbeat;
pub mod manager;
mod subscription;

pub use heartbeat::{start_heartbeat, HEARTBEAT_INTERVAL};
pub use manager::WsManager;
pub use subscription::serve_subscription;
