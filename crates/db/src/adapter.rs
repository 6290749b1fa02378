//! Shape and comment rules on top of a [`Store`] backend.
//!
//! [`ShapeStore`] applies defaults, cross-reference checks and the props
//! merge; [`CommentPager`] turns the newest-first comment feed into cursor
//! pages. Neither touches the event router; publishing is the caller's job.

use std::sync::Arc;

use drawboard_core::error::{CoreError, CoreResult};
use drawboard_core::pagination::{decode_cursor, encode_cursor, resolve_page_size, Connection};
use drawboard_core::shape::validate_geometry;
use drawboard_core::types::DbId;

use crate::models::comment::Comment;
use crate::models::layer::Layer;
use crate::models::shape::{CreateShape, DeletedShape, NewShape, Shape, UpdateShape};
use crate::store::Store;

// ---------------------------------------------------------------------------
// ShapeStore
// ---------------------------------------------------------------------------

/// Shape persistence with defaulting, reference checks and props merging.
///
/// Referenced layers must always exist. In the default permissive mode a
/// shape may name a layer of another board, on create and on reassignment;
/// strict mode rejects both with [`CoreError::Validation`].
#[derive(Clone)]
pub struct ShapeStore {
    store: Arc<dyn Store>,
    strict_layers: bool,
}

impl ShapeStore {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            strict_layers: false,
        }
    }

    pub fn with_strict_layers(mut self, strict: bool) -> Self {
        self.strict_layers = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict_layers
    }

    /// Persist a new shape with `rotation`, `z_index` and `props` defaulted.
    ///
    /// The board and the layer must both exist.
    pub async fn create_shape(&self, input: CreateShape) -> CoreResult<Shape> {
        validate_geometry(
            Some(input.x),
            Some(input.y),
            input.width,
            input.height,
            input.rotation,
        )?;

        if self.store.find_board(input.board_id).await?.is_none() {
            return Err(CoreError::not_found("Board", input.board_id));
        }
        let layer = self.require_layer(input.layer_id).await?;
        if self.strict_layers {
            ensure_same_board(&layer, input.board_id)?;
        }

        self.store.insert_shape(&NewShape::from(input)).await
    }

    /// Apply a partial update.
    ///
    /// `changes.props` is shallow-merged onto the stored bag. The current
    /// record is read, merged and written back without any lock held in
    /// between, so two concurrent props patches may lose keys.
    pub async fn update_shape(&self, id: DbId, mut changes: UpdateShape) -> CoreResult<Shape> {
        validate_geometry(
            changes.x,
            changes.y,
            changes.width.flatten(),
            changes.height.flatten(),
            changes.rotation,
        )?;

        let current = self
            .store
            .find_shape(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Shape", id))?;

        if let Some(layer_id) = changes.layer_id {
            let layer = self.require_layer(layer_id).await?;
            if self.strict_layers {
                ensure_same_board(&layer, current.board_id)?;
            }
        }

        if let Some(patch) = changes.props.take() {
            changes.props = Some(current.props.merged(patch));
        }

        self.store
            .update_shape(id, &changes)
            .await?
            .ok_or_else(|| CoreError::not_found("Shape", id))
    }

    /// Remove a shape, returning its id and the board it belonged to.
    pub async fn delete_shape(&self, id: DbId) -> CoreResult<DeletedShape> {
        let removed = self
            .store
            .delete_shape(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Shape", id))?;
        Ok(DeletedShape {
            id: removed.id,
            board_id: removed.board_id,
        })
    }

    /// Shapes of a board in draw order.
    pub async fn list_shapes_for_board(&self, board_id: DbId) -> CoreResult<Vec<Shape>> {
        self.store.list_shapes_by_board(board_id).await
    }

    /// Layers of a board by ascending order.
    pub async fn list_layers_for_board(&self, board_id: DbId) -> CoreResult<Vec<Layer>> {
        self.store.list_layers(board_id).await
    }

    /// Shapes of a single layer in draw order.
    pub async fn list_shapes_for_layer(&self, layer_id: DbId) -> CoreResult<Vec<Shape>> {
        self.require_layer(layer_id).await?;
        self.store.list_shapes_by_layer(layer_id).await
    }

    async fn require_layer(&self, layer_id: DbId) -> CoreResult<Layer> {
        self.store
            .find_layer(layer_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Layer", layer_id))
    }
}

fn ensure_same_board(layer: &Layer, board_id: DbId) -> CoreResult<()> {
    if layer.board_id != board_id {
        tracing::debug!(layer_id = layer.id, board_id, "Rejected cross-board layer reference");
        return Err(CoreError::Validation(format!(
            "Layer {} does not belong to board {board_id}",
            layer.id
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CommentPager
// ---------------------------------------------------------------------------

/// Cursor pages over a board's comment history, newest first.
#[derive(Clone)]
pub struct CommentPager {
    store: Arc<dyn Store>,
}

impl CommentPager {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Fetch one page of comments.
    ///
    /// `first` defaults to 20. An `after` cursor that is malformed, unknown,
    /// or names a comment of another board starts the page at the newest
    /// comment.
    pub async fn page(
        &self,
        board_id: DbId,
        first: Option<i64>,
        after: Option<&str>,
    ) -> CoreResult<Connection<Comment>> {
        let first = resolve_page_size(first)?;
        if self.store.find_board(board_id).await?.is_none() {
            return Err(CoreError::not_found("Board", board_id));
        }

        let after = decode_cursor(after);
        let records = self
            .store
            .list_comments_after(board_id, after, first + 1)
            .await?;

        Ok(Connection::from_lookahead(records, first, |c| {
            encode_cursor(c.id)
        }))
    }
}
