//! Persistence backends.
//!
//! [`Store`] is the seam between the synchronization engine and durable
//! storage. Implementations only persist and query; merge rules, defaulting
//! and cross-reference checks live in [`crate::adapter`].
//!
//! Every listing method returns records already in their canonical order:
//! shapes by draw order, layers by ascending order, comments newest first.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use drawboard_core::error::CoreResult;
use drawboard_core::roles::UserRole;
use drawboard_core::types::DbId;

use crate::models::board::{Board, BoardWithLayers};
use crate::models::comment::Comment;
use crate::models::layer::{Layer, NewLayer};
use crate::models::membership::BoardMember;
use crate::models::shape::{NewShape, Shape, UpdateShape};
use crate::models::user::User;

#[async_trait]
pub trait Store: Send + Sync {
    /// Check that the backend is reachable.
    async fn ping(&self) -> CoreResult<()>;

    async fn find_user(&self, id: DbId) -> CoreResult<Option<User>>;

    /// Users for the given IDs; unknown IDs are skipped.
    async fn find_users(&self, ids: &[DbId]) -> CoreResult<Vec<User>>;

    /// Insert a user by email or return the existing one unchanged.
    async fn upsert_user(&self, email: &str, role: UserRole) -> CoreResult<User>;

    /// Atomically create a board, an owner membership for `owner_id`, and
    /// the given layers.
    async fn create_board(
        &self,
        name: &str,
        owner_id: DbId,
        layers: &[NewLayer],
    ) -> CoreResult<BoardWithLayers>;

    async fn find_board(&self, id: DbId) -> CoreResult<Option<Board>>;

    async fn list_members(&self, board_id: DbId) -> CoreResult<Vec<BoardMember>>;

    async fn find_layer(&self, id: DbId) -> CoreResult<Option<Layer>>;

    async fn list_layers(&self, board_id: DbId) -> CoreResult<Vec<Layer>>;

    async fn insert_shape(&self, input: &NewShape) -> CoreResult<Shape>;

    async fn find_shape(&self, id: DbId) -> CoreResult<Option<Shape>>;

    /// Overwrite the provided columns. `changes.props`, when present, is the
    /// complete replacement bag. Returns `None` if the shape does not exist.
    async fn update_shape(&self, id: DbId, changes: &UpdateShape) -> CoreResult<Option<Shape>>;

    /// Remove a shape and return the removed record.
    async fn delete_shape(&self, id: DbId) -> CoreResult<Option<Shape>>;

    async fn list_shapes_by_board(&self, board_id: DbId) -> CoreResult<Vec<Shape>>;

    async fn list_shapes_by_layer(&self, layer_id: DbId) -> CoreResult<Vec<Shape>>;

    async fn insert_comment(&self, board_id: DbId, author_id: DbId, body: &str)
        -> CoreResult<Comment>;

    /// Up to `limit` comments of a board, newest first, strictly after the
    /// comment `after`. An `after` that names no comment of this board is
    /// ignored.
    async fn list_comments_after(
        &self,
        board_id: DbId,
        after: Option<DbId>,
        limit: i64,
    ) -> CoreResult<Vec<Comment>>;
}
