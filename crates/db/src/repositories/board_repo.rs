//! Repository for the `boards` table.

use drawboard_core::roles::BoardRole;
use drawboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::board::{Board, BoardWithLayers};
use crate::models::layer::NewLayer;
use crate::repositories::{LayerRepo, MembershipRepo};

/// Column list for boards queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides operations for boards.
pub struct BoardRepo;

impl BoardRepo {
    /// Create a board, its owner membership and its initial layers.
    ///
    /// Runs in a single transaction: either all rows are written or none.
    pub async fn create_with_layers(
        pool: &PgPool,
        name: &str,
        owner_id: DbId,
        layers: &[NewLayer],
    ) -> Result<BoardWithLayers, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!("INSERT INTO boards (name) VALUES ($1) RETURNING {COLUMNS}");
        let board = sqlx::query_as::<_, Board>(&insert_query)
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

        MembershipRepo::create(&mut *tx, board.id, owner_id, BoardRole::Owner).await?;

        let mut created = Vec::with_capacity(layers.len());
        for layer in layers {
            created.push(LayerRepo::create(&mut *tx, board.id, layer).await?);
        }

        tx.commit().await?;
        created.sort_by_key(|l| (l.order, l.id));
        Ok(BoardWithLayers {
            board,
            layers: created,
        })
    }

    /// Find a board by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Board>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM boards WHERE id = $1");
        sqlx::query_as::<_, Board>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
