//! Synchronization facade.
//!
//! Single entry point for every board operation. Mutations run
//! gate -> store -> publish; the event is published from the record the
//! store returned, so its topic always matches where the change landed.
//! Queries go straight to the store and never touch the router.

use std::collections::HashMap;
use std::sync::Arc;

use drawboard_core::authorization::{authorize, require_identity, Action, Identity};
use drawboard_core::error::{CoreError, CoreResult};
use drawboard_core::pagination::Connection;
use drawboard_core::types::DbId;
use drawboard_core::validation::{validate_comment_body, validate_name};
use drawboard_db::adapter::{CommentPager, ShapeStore};
use drawboard_db::models::board::{BoardDetail, BoardWithLayers};
use drawboard_db::models::comment::{Comment, CommentAuthor, CommentNode};
use drawboard_db::models::layer::NewLayer;
use drawboard_db::models::shape::{CreateShape, Shape, UpdateShape};
use drawboard_db::models::user::User;
use drawboard_db::store::Store;
use drawboard_events::{BoardEvent, EventKind, EventRouter, Subscription};

pub struct SyncFacade {
    store: Arc<dyn Store>,
    shapes: ShapeStore,
    comments: CommentPager,
    router: Arc<EventRouter>,
}

impl SyncFacade {
    pub fn new(store: Arc<dyn Store>, router: Arc<EventRouter>) -> Self {
        Self {
            shapes: ShapeStore::new(Arc::clone(&store)),
            comments: CommentPager::new(Arc::clone(&store)),
            store,
            router,
        }
    }

    /// Reject shapes that reference a layer of another board.
    pub fn with_strict_layers(mut self, strict: bool) -> Self {
        self.shapes = self.shapes.with_strict_layers(strict);
        self
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    pub fn router(&self) -> &Arc<EventRouter> {
        &self.router
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The caller's user record, or `None` when anonymous or unknown.
    pub async fn me(&self, identity: Option<&Identity>) -> CoreResult<Option<User>> {
        authorize(identity, Action::ReadMe).into_result(Action::ReadMe)?;
        match identity {
            Some(identity) => self.store.find_user(identity.user_id).await,
            None => Ok(None),
        }
    }

    /// A board with its layers by order and its shapes in draw order.
    pub async fn board(&self, identity: Option<&Identity>, board_id: DbId) -> CoreResult<BoardDetail> {
        let action = Action::ReadBoard { board_id };
        authorize(identity, action).into_result(action)?;

        let board = self
            .store
            .find_board(board_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Board", board_id))?;
        let layers = self.shapes.list_layers_for_board(board_id).await?;
        let shapes = self.shapes.list_shapes_for_board(board_id).await?;

        Ok(BoardDetail {
            board,
            layers,
            shapes,
        })
    }

    /// One page of a board's comments, newest first, with authors resolved.
    pub async fn comments(
        &self,
        identity: Option<&Identity>,
        board_id: DbId,
        first: Option<i64>,
        after: Option<&str>,
    ) -> CoreResult<Connection<CommentNode>> {
        let action = Action::ReadComments { board_id };
        authorize(identity, action).into_result(action)?;

        let page = self.comments.page(board_id, first, after).await?;

        let mut author_ids: Vec<DbId> = page.edges.iter().map(|e| e.node.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let authors: HashMap<DbId, CommentAuthor> = self
            .store
            .find_users(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, CommentAuthor::from(u)))
            .collect();

        Ok(page.map(|comment| CommentNode {
            author: authors.get(&comment.author_id).cloned(),
            comment,
        }))
    }

    /// Shapes of a single layer in draw order.
    pub async fn layer_shapes(&self, identity: Option<&Identity>, layer_id: DbId) -> CoreResult<Vec<Shape>> {
        let action = Action::ReadLayer { layer_id };
        authorize(identity, action).into_result(action)?;
        self.shapes.list_shapes_for_layer(layer_id).await
    }

    /// Open a live feed of `kind` events on a board.
    pub fn subscribe(
        &self,
        identity: Option<&Identity>,
        kind: EventKind,
        board_id: DbId,
    ) -> CoreResult<Subscription> {
        let action = Action::Subscribe { board_id };
        authorize(identity, action).into_result(action)?;
        Ok(self.router.subscribe(kind, board_id))
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Create a board with its default layer, owned by the caller.
    pub async fn create_board(
        &self,
        identity: Option<&Identity>,
        name: &str,
    ) -> CoreResult<BoardWithLayers> {
        let caller = require_identity(identity, Action::CreateBoard)?;
        validate_name("name", name)?;

        let board = self
            .store
            .create_board(name.trim(), caller.user_id, &[NewLayer::default()])
            .await?;

        tracing::info!(
            board_id = board.board.id,
            user_id = caller.user_id,
            "Board created",
        );
        Ok(board)
    }

    pub async fn add_shape(&self, identity: Option<&Identity>, input: CreateShape) -> CoreResult<Shape> {
        let caller = require_identity(identity, Action::AddShape { board_id: input.board_id })?;

        let shape = self.shapes.create_shape(input).await?;
        self.router
            .publish(shape.board_id, BoardEvent::ShapeAdded(shape.clone()));

        tracing::info!(
            shape_id = shape.id,
            board_id = shape.board_id,
            user_id = caller.user_id,
            "Shape added",
        );
        Ok(shape)
    }

    pub async fn update_shape(
        &self,
        identity: Option<&Identity>,
        shape_id: DbId,
        changes: UpdateShape,
    ) -> CoreResult<Shape> {
        let caller = require_identity(identity, Action::UpdateShape { shape_id })?;

        let shape = self.shapes.update_shape(shape_id, changes).await?;
        self.router
            .publish(shape.board_id, BoardEvent::ShapeUpdated(shape.clone()));

        tracing::info!(
            shape_id,
            board_id = shape.board_id,
            user_id = caller.user_id,
            "Shape updated",
        );
        Ok(shape)
    }

    /// Delete a shape; returns its id.
    pub async fn delete_shape(&self, identity: Option<&Identity>, shape_id: DbId) -> CoreResult<DbId> {
        let caller = require_identity(identity, Action::DeleteShape { shape_id })?;

        let deleted = self.shapes.delete_shape(shape_id).await?;
        self.router
            .publish(deleted.board_id, BoardEvent::ShapeDeleted(deleted.id));

        tracing::info!(
            shape_id,
            board_id = deleted.board_id,
            user_id = caller.user_id,
            "Shape deleted",
        );
        Ok(deleted.id)
    }

    /// Append a comment authored by the caller.
    pub async fn add_comment(
        &self,
        identity: Option<&Identity>,
        board_id: DbId,
        body: &str,
    ) -> CoreResult<Comment> {
        let caller = require_identity(identity, Action::AddComment { board_id })?;
        validate_comment_body(body)?;

        if self.store.find_board(board_id).await?.is_none() {
            return Err(CoreError::not_found("Board", board_id));
        }

        let comment = self
            .store
            .insert_comment(board_id, caller.user_id, body)
            .await?;
        self.router
            .publish(comment.board_id, BoardEvent::CommentAdded(comment.clone()));

        tracing::info!(
            comment_id = comment.id,
            board_id,
            user_id = caller.user_id,
            "Comment added",
        );
        Ok(comment)
    }
}
