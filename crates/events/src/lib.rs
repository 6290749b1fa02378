//! Live update fan-out for drawboard.
//!
//! - [`BoardEvent`] is the payload of a change on a board; its variant
//!   fixes the [`EventKind`] it is published under.
//! - [`EventRouter`] delivers events to every subscriber of a
//!   `(kind, board)` topic in publish order.

pub mod event;
pub mod router;

pub use event::{BoardEvent, EventKind};
pub use router::{EventRouter, Subscription, Topic};
