//! Demo data for local development.

use drawboard_core::error::{CoreError, CoreResult};
use drawboard_core::roles::UserRole;
use drawboard_core::shape::{ShapeKind, ShapeProps};

use crate::models::board::BoardWithLayers;
use crate::models::layer::NewLayer;
use crate::models::shape::{NewShape, Shape};
use crate::models::user::User;
use crate::store::Store;

pub const DEMO_EMAIL: &str = "demo@draw.app";
pub const DEMO_BOARD_NAME: &str = "Collab Demo Board";

/// What [`seed_demo`] wrote.
#[derive(Debug, Clone)]
pub struct DemoSeed {
    pub user: User,
    pub board: BoardWithLayers,
    pub shape: Shape,
}

/// Upsert the demo admin and create a demo board with two layers and one
/// rectangle on the foreground layer.
///
/// The user is reused across runs; the board is created fresh each time.
pub async fn seed_demo(store: &dyn Store) -> CoreResult<DemoSeed> {
    let user = store.upsert_user(DEMO_EMAIL, UserRole::Admin).await?;

    let layers = [NewLayer::new("Background", 1), NewLayer::new("Foreground", 2)];
    let board = store.create_board(DEMO_BOARD_NAME, user.id, &layers).await?;

    let foreground = board
        .layers
        .iter()
        .find(|l| l.name == "Foreground")
        .ok_or_else(|| CoreError::Internal("demo board is missing its foreground layer".into()))?;

    let shape = store
        .insert_shape(&NewShape {
            board_id: board.board.id,
            layer_id: foreground.id,
            kind: ShapeKind::Rectangle,
            x: 100.0,
            y: 80.0,
            width: Some(200.0),
            height: Some(120.0),
            rotation: 0.0,
            z_index: 1,
            props: ShapeProps {
                fill: Some("#cccccc".into()),
                stroke: Some("#333333".into()),
                ..Default::default()
            },
        })
        .await?;

    tracing::info!(
        user_id = user.id,
        board_id = board.board.id,
        shape_id = shape.id,
        "Seeded demo board",
    );

    Ok(DemoSeed { user, board, shape })
}
