//! Board events and their kinds.

use std::fmt;
use std::str::FromStr;

use drawboard_core::error::CoreError;
use drawboard_core::types::DbId;
use drawboard_db::models::comment::Comment;
use drawboard_db::models::shape::Shape;
use serde::Serialize;

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// The four channels a client can subscribe to on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    ShapeAdded,
    ShapeUpdated,
    ShapeDeleted,
    CommentAdded,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        Self::ShapeAdded,
        Self::ShapeUpdated,
        Self::ShapeDeleted,
        Self::CommentAdded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShapeAdded => "shape-added",
            Self::ShapeUpdated => "shape-updated",
            Self::ShapeDeleted => "shape-deleted",
            Self::CommentAdded => "comment-added",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown event kind '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// BoardEvent
// ---------------------------------------------------------------------------

/// A change on a board, as delivered to subscribers.
///
/// Serialized as `{"event": "<kind>", "data": <payload>}`. Deletions carry
/// only the shape id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum BoardEvent {
    ShapeAdded(Shape),
    ShapeUpdated(Shape),
    ShapeDeleted(DbId),
    CommentAdded(Comment),
}

impl BoardEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ShapeAdded(_) => EventKind::ShapeAdded,
            Self::ShapeUpdated(_) => EventKind::ShapeUpdated,
            Self::ShapeDeleted(_) => EventKind::ShapeDeleted,
            Self::CommentAdded(_) => EventKind::CommentAdded,
        }
    }
}
