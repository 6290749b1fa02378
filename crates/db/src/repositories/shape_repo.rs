//! Repository for the `shapes` table.

use drawboard_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::shape::{NewShape, Shape, UpdateShape};

/// Column list for shapes queries.
const COLUMNS: &str = "id, board_id, layer_id, kind, x, y, width, height, rotation, \
    z_index, props, created_at, updated_at";

/// Draw order: z-index, then creation time, then insertion order.
const DRAW_ORDER: &str = "z_index ASC, created_at ASC, id ASC";

/// Provides CRUD operations for shapes.
pub struct ShapeRepo;

impl ShapeRepo {
    /// Insert a new shape, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewShape) -> Result<Shape, sqlx::Error> {
        let query = format!(
            "INSERT INTO shapes
                (board_id, layer_id, kind, x, y, width, height, rotation, z_index, props)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shape>(&query)
            .bind(input.board_id)
            .bind(input.layer_id)
            .bind(input.kind.as_str())
            .bind(input.x)
            .bind(input.y)
            .bind(input.width)
            .bind(input.height)
            .bind(input.rotation)
            .bind(input.z_index)
            .bind(Json(&input.props))
            .fetch_one(pool)
            .await
    }

    /// Find a shape by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Shape>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shapes WHERE id = $1");
        sqlx::query_as::<_, Shape>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the shapes of a board in draw order.
    pub async fn list_by_board(pool: &PgPool, board_id: DbId) -> Result<Vec<Shape>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shapes WHERE board_id = $1 ORDER BY {DRAW_ORDER}");
        sqlx::query_as::<_, Shape>(&query)
            .bind(board_id)
            .fetch_all(pool)
            .await
    }

    /// List the shapes of a layer in draw order.
    pub async fn list_by_layer(pool: &PgPool, layer_id: DbId) -> Result<Vec<Shape>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM shapes WHERE layer_id = $1 ORDER BY {DRAW_ORDER}");
        sqlx::query_as::<_, Shape>(&query)
            .bind(layer_id)
            .fetch_all(pool)
            .await
    }

    /// Partially update a shape.
    ///
    /// Uses `COALESCE` so only provided fields are changed. `width` and
    /// `height` use a provided-flag so an explicit `null` clears the column.
    /// `props`, when present, replaces the stored bag wholesale; merging is
    /// the caller's job.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateShape,
    ) -> Result<Option<Shape>, sqlx::Error> {
        let query = format!(
            "UPDATE shapes SET
                x          = COALESCE($2, x),
                y          = COALESCE($3, y),
                width      = CASE WHEN $4 THEN $5 ELSE width END,
                height     = CASE WHEN $6 THEN $7 ELSE height END,
                rotation   = COALESCE($8, rotation),
                z_index    = COALESCE($9, z_index),
                props      = COALESCE($10, props),
                layer_id   = COALESCE($11, layer_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shape>(&query)
            .bind(id)
            .bind(input.x)
            .bind(input.y)
            .bind(input.width.is_some())
            .bind(input.width.flatten())
            .bind(input.height.is_some())
            .bind(input.height.flatten())
            .bind(input.rotation)
            .bind(input.z_index)
            .bind(input.props.as_ref().map(Json))
            .bind(input.layer_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a shape, returning the deleted row in the same statement.
    pub async fn delete_returning(pool: &PgPool, id: DbId) -> Result<Option<Shape>, sqlx::Error> {
        let query = format!("DELETE FROM shapes WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Shape>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
