//! Shape model and DTOs.

use drawboard_core::serde_helpers::deserialize_some;
use drawboard_core::shape::{ShapeKind, ShapeProps};
use drawboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `shapes` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Shape {
    pub id: DbId,
    pub board_id: DbId,
    pub layer_id: DbId,
    #[sqlx(try_from = "String")]
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Degrees.
    pub rotation: f64,
    /// Draw order within the board, independent of layer order.
    pub z_index: i32,
    #[sqlx(json)]
    pub props: ShapeProps,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a shape to a board.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateShape {
    pub board_id: DbId,
    pub layer_id: DbId,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub z_index: Option<i32>,
    pub props: Option<ShapeProps>,
}

/// A shape ready for insertion, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShape {
    pub board_id: DbId,
    pub layer_id: DbId,
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: f64,
    pub z_index: i32,
    pub props: ShapeProps,
}

impl From<CreateShape> for NewShape {
    fn from(input: CreateShape) -> Self {
        Self {
            board_id: input.board_id,
            layer_id: input.layer_id,
            kind: input.kind,
            x: input.x,
            y: input.y,
            width: input.width,
            height: input.height,
            rotation: input.rotation.unwrap_or(0.0),
            z_index: input.z_index.unwrap_or(0),
            props: input.props.unwrap_or_default(),
        }
    }
}

/// DTO for patching a shape.
///
/// Absent fields are left untouched. `width` and `height` distinguish an
/// omitted key (`None`) from an explicit `null` (`Some(None)`, clears the
/// column). On the way into the adapter `props` is a patch to merge; on the
/// way into a [`Store`](crate::store::Store) it is the full merged bag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateShape {
    pub x: Option<f64>,
    pub y: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub width: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub height: Option<Option<f64>>,
    pub rotation: Option<f64>,
    pub z_index: Option<i32>,
    pub props: Option<ShapeProps>,
    pub layer_id: Option<DbId>,
}

impl UpdateShape {
    /// Apply this patch to an in-memory record, `props` replacing wholesale.
    pub fn apply_to(&self, shape: &mut Shape) {
        if let Some(x) = self.x {
            shape.x = x;
        }
        if let Some(y) = self.y {
            shape.y = y;
        }
        if let Some(width) = self.width {
            shape.width = width;
        }
        if let Some(height) = self.height {
            shape.height = height;
        }
        if let Some(rotation) = self.rotation {
            shape.rotation = rotation;
        }
        if let Some(z_index) = self.z_index {
            shape.z_index = z_index;
        }
        if let Some(props) = &self.props {
            shape.props = props.clone();
        }
        if let Some(layer_id) = self.layer_id {
            shape.layer_id = layer_id;
        }
    }
}

/// What remains of a shape after deletion: enough to route the fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedShape {
    pub id: DbId,
    pub board_id: DbId,
}
