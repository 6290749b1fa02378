//! In-process backend.
//!
//! Holds every table in a single `RwLock`, so each trait call is atomic on
//! its own but two calls are not serialized with respect to each other.
//! Used by the test suites and by the server when no `DATABASE_URL` is
//! configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use drawboard_core::error::{CoreError, CoreResult};
use drawboard_core::roles::{BoardRole, UserRole};
use drawboard_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::board::{Board, BoardWithLayers};
use crate::models::comment::Comment;
use crate::models::layer::{Layer, NewLayer};
use crate::models::membership::BoardMember;
use crate::models::shape::{NewShape, Shape, UpdateShape};
use crate::models::user::User;
use crate::ordering::{comments_after, sort_comments_newest_first, sort_layers, sort_shapes};
use crate::store::Store;

#[derive(Default)]
struct Tables {
    last_id: DbId,
    users: BTreeMap<DbId, User>,
    boards: BTreeMap<DbId, Board>,
    members: BTreeMap<DbId, BoardMember>,
    layers: BTreeMap<DbId, Layer>,
    shapes: BTreeMap<DbId, Shape>,
    comments: BTreeMap<DbId, Comment>,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }
}

/// [`Store`] kept entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> CoreResult<()> {
        Ok(())
    }

    async fn find_user(&self, id: DbId) -> CoreResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_users(&self, ids: &[DbId]) -> CoreResult<Vec<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn upsert_user(&self, email: &str, role: UserRole) -> CoreResult<User> {
        let mut tables = self.tables.write().await;
        if let Some(existing) = tables.users.values().find(|u| u.email == email) {
            return Ok(existing.clone());
        }
        let now = Utc::now();
        let user = User {
            id: tables.next_id(),
            email: email.to_string(),
            role,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn create_board(
        &self,
        name: &str,
        owner_id: DbId,
        layers: &[NewLayer],
    ) -> CoreResult<BoardWithLayers> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&owner_id) {
            return Err(CoreError::store(format!(
                "board owner {owner_id} does not reference an existing user"
            )));
        }

        let now = Utc::now();
        let board = Board {
            id: tables.next_id(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        let member = BoardMember {
            id: tables.next_id(),
            board_id: board.id,
            user_id: owner_id,
            role: BoardRole::Owner,
            created_at: now,
        };

        let mut created = Vec::with_capacity(layers.len());
        for input in layers {
            created.push(Layer {
                id: tables.next_id(),
                board_id: board.id,
                name: input.name.clone(),
                order: input.order,
                created_at: now,
            });
        }

        tables.boards.insert(board.id, board.clone());
        tables.members.insert(member.id, member);
        for layer in &created {
            tables.layers.insert(layer.id, layer.clone());
        }

        sort_layers(&mut created);
        Ok(BoardWithLayers {
            board,
            layers: created,
        })
    }

    async fn find_board(&self, id: DbId) -> CoreResult<Option<Board>> {
        Ok(self.tables.read().await.boards.get(&id).cloned())
    }

    async fn list_members(&self, board_id: DbId) -> CoreResult<Vec<BoardMember>> {
        let tables = self.tables.read().await;
        Ok(tables
            .members
            .values()
            .filter(|m| m.board_id == board_id)
            .cloned()
            .collect())
    }

    async fn find_layer(&self, id: DbId) -> CoreResult<Option<Layer>> {
        Ok(self.tables.read().await.layers.get(&id).cloned())
    }

    async fn list_layers(&self, board_id: DbId) -> CoreResult<Vec<Layer>> {
        let tables = self.tables.read().await;
        let mut layers: Vec<Layer> = tables
            .layers
            .values()
            .filter(|l| l.board_id == board_id)
            .cloned()
            .collect();
        sort_layers(&mut layers);
        Ok(layers)
    }

    async fn insert_shape(&self, input: &NewShape) -> CoreResult<Shape> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let shape = Shape {
            id: tables.next_id(),
            board_id: input.board_id,
            layer_id: input.layer_id,
            kind: input.kind,
            x: input.x,
            y: input.y,
            width: input.width,
            height: input.height,
            rotation: input.rotation,
            z_index: input.z_index,
            props: input.props.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.shapes.insert(shape.id, shape.clone());
        Ok(shape)
    }

    async fn find_shape(&self, id: DbId) -> CoreResult<Option<Shape>> {
        Ok(self.tables.read().await.shapes.get(&id).cloned())
    }

    async fn update_shape(&self, id: DbId, changes: &UpdateShape) -> CoreResult<Option<Shape>> {
        let mut tables = self.tables.write().await;
        let Some(shape) = tables.shapes.get_mut(&id) else {
            return Ok(None);
        };
        changes.apply_to(shape);
        shape.updated_at = Utc::now();
        Ok(Some(shape.clone()))
    }

    async fn delete_shape(&self, id: DbId) -> CoreResult<Option<Shape>> {
        Ok(self.tables.write().await.shapes.remove(&id))
    }

    async fn list_shapes_by_board(&self, board_id: DbId) -> CoreResult<Vec<Shape>> {
        let tables = self.tables.read().await;
        let mut shapes: Vec<Shape> = tables
            .shapes
            .values()
            .filter(|s| s.board_id == board_id)
            .cloned()
            .collect();
        sort_shapes(&mut shapes);
        Ok(shapes)
    }

    async fn list_shapes_by_layer(&self, layer_id: DbId) -> CoreResult<Vec<Shape>> {
        let tables = self.tables.read().await;
        let mut shapes: Vec<Shape> = tables
            .shapes
            .values()
            .filter(|s| s.layer_id == layer_id)
            .cloned()
            .collect();
        sort_shapes(&mut shapes);
        Ok(shapes)
    }

    async fn insert_comment(
        &self,
        board_id: DbId,
        author_id: DbId,
        body: &str,
    ) -> CoreResult<Comment> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&author_id) {
            return Err(CoreError::store(format!(
                "comment author {author_id} does not reference an existing user"
            )));
        }
        if !tables.boards.contains_key(&board_id) {
            return Err(CoreError::store(format!(
                "comment board {board_id} does not reference an existing board"
            )));
        }
        let comment = Comment {
            id: tables.next_id(),
            board_id,
            author_id,
            body: body.to_string(),
            created_at: Utc::now(),
        };
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn list_comments_after(
        &self,
        board_id: DbId,
        after: Option<DbId>,
        limit: i64,
    ) -> CoreResult<Vec<Comment>> {
        let tables = self.tables.read().await;
        let mut feed: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.board_id == board_id)
            .cloned()
            .collect();
        sort_comments_newest_first(&mut feed);

        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(comments_after(&feed, after)
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use drawboard_core::shape::{ShapeKind, ShapeProps};

    use super::*;

    async fn store_with_board() -> (MemoryStore, BoardWithLayers) {
        let store = MemoryStore::new();
        let owner = store.upsert_user("owner@draw.app", UserRole::User).await.unwrap();
        let board = store
            .create_board("Sketch", owner.id, &[NewLayer::default()])
            .await
            .unwrap();
        (store, board)
    }

    fn new_shape(board: &BoardWithLayers) -> NewShape {
        NewShape {
            board_id: board.board.id,
            layer_id: board.layers[0].id,
            kind: ShapeKind::Ellipse,
            x: 1.0,
            y: 2.0,
            width: Some(10.0),
            height: Some(5.0),
            rotation: 0.0,
            z_index: 0,
            props: ShapeProps::default(),
        }
    }

    #[tokio::test]
    async fn upsert_user_returns_existing_row() {
        let store = MemoryStore::new();
        let first = store.upsert_user("a@draw.app", UserRole::Admin).await.unwrap();
        let again = store.upsert_user("a@draw.app", UserRole::User).await.unwrap();
        assert_eq!(first, again);
        assert_eq!(again.role, UserRole::Admin);
    }

    #[tokio::test]
    async fn create_board_writes_owner_membership() {
        let (store, board) = store_with_board().await;
        let members = store.list_members(board.board.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].role, BoardRole::Owner);
    }

    #[tokio::test]
    async fn create_board_for_unknown_owner_writes_nothing() {
        let store = MemoryStore::new();
        let result = store.create_board("Orphan", 404, &[NewLayer::default()]).await;
        assert!(matches!(result, Err(CoreError::Store(_))));
        assert!(store.tables.read().await.boards.is_empty());
        assert!(store.tables.read().await.layers.is_empty());
    }

    #[tokio::test]
    async fn comment_by_unknown_author_writes_nothing() {
        let (store, board) = store_with_board().await;
        let result = store.insert_comment(board.board.id, 424_242, "ghost").await;
        assert!(matches!(result, Err(CoreError::Store(_))));
        assert!(store.tables.read().await.comments.is_empty());
    }

    #[tokio::test]
    async fn update_clears_width_on_explicit_null() {
        let (store, board) = store_with_board().await;
        let shape = store.insert_shape(&new_shape(&board)).await.unwrap();

        let changes = UpdateShape {
            width: Some(None),
            ..Default::default()
        };
        let updated = store.update_shape(shape.id, &changes).await.unwrap().unwrap();
        assert_eq!(updated.width, None);
        assert_eq!(updated.height, Some(5.0));
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let (store, board) = store_with_board().await;
        let shape = store.insert_shape(&new_shape(&board)).await.unwrap();

        let deleted = store.delete_shape(shape.id).await.unwrap();
        assert_eq!(deleted.map(|s| s.board_id), Some(board.board.id));
        assert!(store.find_shape(shape.id).await.unwrap().is_none());
        assert!(store.delete_shape(shape.id).await.unwrap().is_none());
    }
}
