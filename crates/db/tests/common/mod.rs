#![allow(dead_code)]

use std::sync::Arc;

use drawboard_core::roles::UserRole;
use drawboard_core::shape::{ShapeKind, ShapeProps};
use drawboard_core::types::DbId;
use drawboard_db::adapter::{CommentPager, ShapeStore};
use drawboard_db::models::board::BoardWithLayers;
use drawboard_db::models::layer::NewLayer;
use drawboard_db::models::shape::CreateShape;
use drawboard_db::models::user::User;
use drawboard_db::store::{MemoryStore, Store};

/// A memory-backed store with one user and one single-layer board.
pub struct Fixture {
    pub store: Arc<MemoryStore>,
    pub shapes: ShapeStore,
    pub pager: CommentPager,
    pub owner: User,
    pub board: BoardWithLayers,
}

impl Fixture {
    pub fn board_id(&self) -> DbId {
        self.board.board.id
    }

    pub fn layer_id(&self) -> DbId {
        self.board.layers[0].id
    }

    /// Create another board owned by the fixture user.
    pub async fn other_board(&self, name: &str) -> BoardWithLayers {
        self.store
            .create_board(name, self.owner.id, &[NewLayer::default()])
            .await
            .unwrap()
    }
}

pub async fn fixture() -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let owner = store
        .upsert_user("owner@draw.app", UserRole::User)
        .await
        .unwrap();
    let board = store
        .create_board("Sketch", owner.id, &[NewLayer::default()])
        .await
        .unwrap();

    let dyn_store: Arc<dyn Store> = store.clone();
    Fixture {
        shapes: ShapeStore::new(dyn_store.clone()),
        pager: CommentPager::new(dyn_store),
        store,
        owner,
        board,
    }
}

/// A 10x10 rectangle at the origin with every optional field omitted.
pub fn rect(board_id: DbId, layer_id: DbId) -> CreateShape {
    CreateShape {
        board_id,
        layer_id,
        kind: ShapeKind::Rectangle,
        x: 0.0,
        y: 0.0,
        width: Some(10.0),
        height: Some(10.0),
        rotation: None,
        z_index: None,
        props: None,
    }
}

pub fn props(value: serde_json::Value) -> ShapeProps {
    serde_json::from_value(value).unwrap()
}
