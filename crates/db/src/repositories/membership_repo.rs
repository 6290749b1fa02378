//! Repository for the `board_members` table.

use drawboard_core::roles::BoardRole;
use drawboard_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::membership::BoardMember;

/// Column list for board_members queries.
const COLUMNS: &str = "id, board_id, user_id, role, created_at";

/// Provides operations for board memberships.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Insert a membership on an open connection or transaction.
    pub async fn create(
        conn: &mut PgConnection,
        board_id: DbId,
        user_id: DbId,
        role: BoardRole,
    ) -> Result<BoardMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO board_members (board_id, user_id, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(board_id)
            .bind(user_id)
            .bind(role.as_str())
            .fetch_one(conn)
            .await
    }

    /// List the members of a board, oldest membership first.
    pub async fn list_by_board(
        pool: &PgPool,
        board_id: DbId,
    ) -> Result<Vec<BoardMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM board_members
             WHERE board_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, BoardMember>(&query)
            .bind(board_id)
            .fetch_all(pool)
            .await
    }
}
