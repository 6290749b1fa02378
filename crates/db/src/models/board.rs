//! Board model and DTOs.

use drawboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::layer::Layer;
use crate::models::shape::Shape;

/// A row from the `boards` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Board {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new board.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBoard {
    pub name: String,
}

/// A freshly created board together with its initial layers.
#[derive(Debug, Clone, Serialize)]
pub struct BoardWithLayers {
    #[serde(flatten)]
    pub board: Board,
    pub layers: Vec<Layer>,
}

/// A board with its layers (by order) and shapes (by draw order).
#[derive(Debug, Clone, Serialize)]
pub struct BoardDetail {
    #[serde(flatten)]
    pub board: Board,
    pub layers: Vec<Layer>,
    pub shapes: Vec<Shape>,
}
