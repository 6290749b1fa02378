//! Board membership model.

use drawboard_core::roles::BoardRole;
use drawboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `board_members` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BoardMember {
    pub id: DbId,
    pub board_id: DbId,
    pub user_id: DbId,
    #[sqlx(try_from = "String")]
    pub role: BoardRole,
    pub created_at: Timestamp,
}
