//! PostgreSQL backend built on the repository layer.

use async_trait::async_trait;
use drawboard_core::error::{CoreError, CoreResult};
use drawboard_core::roles::UserRole;
use drawboard_core::types::DbId;

use crate::models::board::{Board, BoardWithLayers};
use crate::models::comment::Comment;
use crate::models::layer::{Layer, NewLayer};
use crate::models::membership::BoardMember;
use crate::models::shape::{NewShape, Shape, UpdateShape};
use crate::models::user::User;
use crate::repositories::{
    BoardRepo, CommentRepo, LayerRepo, MembershipRepo, ShapeRepo, UserRepo,
};
use crate::store::Store;
use crate::DbPool;

/// [`Store`] backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> CoreResult<()> {
        crate::health_check(&self.pool).await.map_err(CoreError::store)
    }

    async fn find_user(&self, id: DbId) -> CoreResult<Option<User>> {
        UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::store)
    }

    async fn find_users(&self, ids: &[DbId]) -> CoreResult<Vec<User>> {
        UserRepo::find_many(&self.pool, ids)
            .await
            .map_err(CoreError::store)
    }

    async fn upsert_user(&self, email: &str, role: UserRole) -> CoreResult<User> {
        UserRepo::upsert_by_email(&self.pool, email, role)
            .await
            .map_err(CoreError::store)
    }

    async fn create_board(
        &self,
        name: &str,
        owner_id: DbId,
        layers: &[NewLayer],
    ) -> CoreResult<BoardWithLayers> {
        BoardRepo::create_with_layers(&self.pool, name, owner_id, layers)
            .await
            .map_err(CoreError::store)
    }

    async fn find_board(&self, id: DbId) -> CoreResult<Option<Board>> {
        BoardRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::store)
    }

    async fn list_members(&self, board_id: DbId) -> CoreResult<Vec<BoardMember>> {
        MembershipRepo::list_by_board(&self.pool, board_id)
            .await
            .map_err(CoreError::store)
    }

    async fn find_layer(&self, id: DbId) -> CoreResult<Option<Layer>> {
        LayerRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::store)
    }

    async fn list_layers(&self, board_id: DbId) -> CoreResult<Vec<Layer>> {
        LayerRepo::list_by_board(&self.pool, board_id)
            .await
            .map_err(CoreError::store)
    }

    async fn insert_shape(&self, input: &NewShape) -> CoreResult<Shape> {
        ShapeRepo::create(&self.pool, input)
            .await
            .map_err(CoreError::store)
    }

    async fn find_shape(&self, id: DbId) -> CoreResult<Option<Shape>> {
        ShapeRepo::find_by_id(&self.pool, id)
            .await
            .map_err(CoreError::store)
    }

    async fn update_shape(&self, id: DbId, changes: &UpdateShape) -> CoreResult<Option<Shape>> {
        ShapeRepo::update(&self.pool, id, changes)
            .await
            .map_err(CoreError::store)
    }

    async fn delete_shape(&self, id: DbId) -> CoreResult<Option<Shape>> {
        ShapeRepo::delete_returning(&self.pool, id)
            .await
            .map_err(CoreError::store)
    }

    async fn list_shapes_by_board(&self, board_id: DbId) -> CoreResult<Vec<Shape>> {
        ShapeRepo::list_by_board(&self.pool, board_id)
            .await
            .map_err(CoreError::store)
    }

    async fn list_shapes_by_layer(&self, layer_id: DbId) -> CoreResult<Vec<Shape>> {
        ShapeRepo::list_by_layer(&self.pool, layer_id)
            .await
            .map_err(CoreError::store)
    }

    async fn insert_comment(
        &self,
        board_id: DbId,
        author_id: DbId,
        body: &str,
    ) -> CoreResult<Comment> {
        CommentRepo::create(&self.pool, board_id, author_id, body)
            .await
            .map_err(CoreError::store)
    }

    async fn list_comments_after(
        &self,
        board_id: DbId,
        after: Option<DbId>,
        limit: i64,
    ) -> CoreResult<Vec<Comment>> {
        CommentRepo::list_after(&self.pool, board_id, after, limit)
            .await
            .map_err(CoreError::store)
    }
}
