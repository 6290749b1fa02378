//! Comment model and DTOs.

use drawboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::User;

/// A row from the `comments` table. Immutable once written.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub board_id: DbId,
    pub author_id: DbId,
    pub body: String,
    pub created_at: Timestamp,
}

/// DTO for posting a comment to a board.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub body: String,
}

/// Public view of a comment author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentAuthor {
    pub id: DbId,
    pub email: String,
}

impl From<User> for CommentAuthor {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// A comment with its author resolved, as served in comment pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: Option<CommentAuthor>,
}
