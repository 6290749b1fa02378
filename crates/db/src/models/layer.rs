//! Layer model and DTOs.

use drawboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Name of the layer every new board starts with.
pub const DEFAULT_LAYER_NAME: &str = "Layer 1";

/// Order of the layer every new board starts with.
pub const DEFAULT_LAYER_ORDER: i32 = 1;

/// A row from the `layers` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Layer {
    pub id: DbId,
    pub board_id: DbId,
    pub name: String,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub created_at: Timestamp,
}

/// DTO for a layer created alongside its board.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewLayer {
    pub name: String,
    pub order: i32,
}

impl NewLayer {
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }
}

impl Default for NewLayer {
    fn default() -> Self {
        Self::new(DEFAULT_LAYER_NAME, DEFAULT_LAYER_ORDER)
    }
}
