//! Repository for the `comments` table.

use drawboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::Comment;

/// Column list for comments queries.
const COLUMNS: &str = "id, board_id, author_id, body, created_at";

/// Provides append and feed operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Append a comment to a board.
    pub async fn create(
        pool: &PgPool,
        board_id: DbId,
        author_id: DbId,
        body: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (board_id, author_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(board_id)
            .bind(author_id)
            .bind(body)
            .fetch_one(pool)
            .await
    }

    /// List up to `limit` comments of a board, newest first, strictly after
    /// the comment `after`.
    ///
    /// A cursor that does not name a comment of this board is ignored and the
    /// feed starts from the newest comment.
    pub async fn list_after(
        pool: &PgPool,
        board_id: DbId,
        after: Option<DbId>,
        limit: i64,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "WITH anchor AS (
                 SELECT created_at, id FROM comments WHERE id = $2 AND board_id = $1
             )
             SELECT {COLUMNS} FROM comments
             WHERE board_id = $1
               AND (
                   NOT EXISTS (SELECT 1 FROM anchor)
                   OR (created_at, id) < (SELECT created_at, id FROM anchor)
               )
             ORDER BY created_at DESC, id DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(board_id)
            .bind(after)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
