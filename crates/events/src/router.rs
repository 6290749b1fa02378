//! Topic-keyed fan-out of [`BoardEvent`]s.
//!
//! Every subscriber owns an unbounded `mpsc` queue registered under its
//! [`Topic`]. Publishing enqueues a clone of the event onto each queue of
//! the topic while holding the listener lock, so all subscribers of a topic
//! observe the same order. Nothing is retained for late subscribers.

use std::collections::HashMap;
use std::fmt;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::task::{Context, Poll};

use drawboard_core::types::DbId;
use futures::Stream;
use tokio::sync::mpsc;

use crate::event::{BoardEvent, EventKind};

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// A `(kind, board)` pair; the unit of ordering and delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Topic {
    pub kind: EventKind,
    pub board_id: DbId,
}

impl Topic {
    pub fn new(kind: EventKind, board_id: DbId) -> Self {
        Self { kind, board_id }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.board_id)
    }
}

// ---------------------------------------------------------------------------
// EventRouter
// ---------------------------------------------------------------------------

type SubscriberId = u64;
type Listeners = HashMap<Topic, HashMap<SubscriberId, mpsc::UnboundedSender<BoardEvent>>>;

/// In-process router shared as `Arc<EventRouter>`.
#[derive(Default)]
pub struct EventRouter {
    listeners: Arc<Mutex<Listeners>>,
    next_id: AtomicU64,
    /// Set by [`EventRouter::close_all`]; read and written under the
    /// listener lock.
    closed: AtomicBool,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every current subscriber of its topic on
    /// `board_id`. Returns the number of subscribers it was queued for.
    ///
    /// Never fails: queues whose subscriber has gone away are pruned.
    pub fn publish(&self, board_id: DbId, event: BoardEvent) -> usize {
        let topic = Topic::new(event.kind(), board_id);
        let mut listeners = lock(&self.listeners);
        let Some(subscribers) = listeners.get_mut(&topic) else {
            return 0;
        };

        subscribers.retain(|id, tx| {
            let open = tx.send(event.clone()).is_ok();
            if !open {
                tracing::debug!(%topic, subscriber_id = id, "Pruned closed subscriber");
            }
            open
        });

        let delivered = subscribers.len();
        if delivered == 0 {
            listeners.remove(&topic);
        }
        delivered
    }

    /// Register a new subscriber on `(kind, board_id)`.
    ///
    /// The returned [`Subscription`] only sees events published after this
    /// call and unregisters itself when dropped. Once the router is closed
    /// nothing is registered and the subscription ends immediately.
    pub fn subscribe(&self, kind: EventKind, board_id: DbId) -> Subscription {
        let topic = Topic::new(kind, board_id);
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::unbounded_channel();

        let mut listeners = lock(&self.listeners);
        if self.closed.load(Ordering::Acquire) {
            drop(tx);
            tracing::debug!(%topic, subscriber_id = id, "Router closed, subscription ends at once");
        } else {
            listeners.entry(topic).or_default().insert(id, tx);
            tracing::debug!(%topic, subscriber_id = id, "Subscriber registered");
        }
        drop(listeners);

        Subscription {
            topic,
            id,
            receiver: rx,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Number of live subscribers on a topic.
    pub fn subscriber_count(&self, topic: Topic) -> usize {
        lock(&self.listeners).get(&topic).map_or(0, HashMap::len)
    }

    /// Drop every queue and refuse new subscribers. Open subscriptions drain
    /// what was already queued and then end.
    pub fn close_all(&self) {
        let mut listeners = lock(&self.listeners);
        self.closed.store(true, Ordering::Release);
        let count: usize = listeners.values().map(HashMap::len).sum();
        listeners.clear();
        tracing::info!(count, "Closed all subscriptions");
    }
}

fn lock(listeners: &Mutex<Listeners>) -> MutexGuard<'_, Listeners> {
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// A live feed of one topic.
///
/// Yields events until the router closes it; dropping it cancels the
/// subscription without affecting other subscribers.
pub struct Subscription {
    topic: Topic,
    id: SubscriberId,
    receiver: mpsc::UnboundedReceiver<BoardEvent>,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Wait for the next event; `None` once the router has closed the feed.
    pub async fn recv(&mut self) -> Option<BoardEvent> {
        self.receiver.recv().await
    }
}

impl Stream for Subscription {
    type Item = BoardEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(listeners) = self.listeners.upgrade() else {
            return;
        };
        let mut listeners = lock(&listeners);
        if let Some(subscribers) = listeners.get_mut(&self.topic) {
            subscribers.remove(&self.id);
            if subscribers.is_empty() {
                listeners.remove(&self.topic);
            }
        }
        tracing::debug!(topic = %self.topic, subscriber_id = self.id, "Subscriber dropped");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
