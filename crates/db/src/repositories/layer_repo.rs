//! Repository for the `layers` table.

use drawboard_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::layer::{Layer, NewLayer};

/// Column list for layers queries.
const COLUMNS: &str = "id, board_id, name, sort_order, created_at";

/// Provides operations for layers.
pub struct LayerRepo;

impl LayerRepo {
    /// Insert a layer on an open connection or transaction.
    pub async fn create(
        conn: &mut PgConnection,
        board_id: DbId,
        input: &NewLayer,
    ) -> Result<Layer, sqlx::Error> {
        let query = format!(
            "INSERT INTO layers (board_id, name, sort_order)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Layer>(&query)
            .bind(board_id)
            .bind(&input.name)
            .bind(input.order)
            .fetch_one(conn)
            .await
    }

    /// Find a layer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Layer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM layers WHERE id = $1");
        sqlx::query_as::<_, Layer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the layers of a board by ascending order.
    ///
    /// Duplicate orders fall back to insertion (id) order.
    pub async fn list_by_board(pool: &PgPool, board_id: DbId) -> Result<Vec<Layer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM layers
             WHERE board_id = $1
             ORDER BY sort_order ASC, id ASC"
        );
        sqlx::query_as::<_, Layer>(&query)
            .bind(board_id)
            .fetch_all(pool)
            .await
    }
}
