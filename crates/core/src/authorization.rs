//! Authorization gate for board mutations.
//!
//! The gate only distinguishes authenticated from anonymous callers. Any
//! resolved identity may mutate any board; membership roles are not
//! consulted.

use serde::Serialize;

use crate::error::CoreError;
use crate::roles::UserRole;
use crate::types::DbId;

/// A caller whose credential resolved to a known user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: DbId,
    pub role: UserRole,
}

impl Identity {
    pub fn new(user_id: DbId, role: UserRole) -> Self {
        Self { user_id, role }
    }
}

/// An operation a caller intends to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateBoard,
    AddShape { board_id: DbId },
    UpdateShape { shape_id: DbId },
    DeleteShape { shape_id: DbId },
    AddComment { board_id: DbId },
    ReadBoard { board_id: DbId },
    ReadComments { board_id: DbId },
    ReadLayer { layer_id: DbId },
    ReadMe,
    Subscribe { board_id: DbId },
}

impl Action {
    /// Whether the action changes persisted state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::CreateBoard
                | Self::AddShape { .. }
                | Self::UpdateShape { .. }
                | Self::DeleteShape { .. }
                | Self::AddComment { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateBoard => "createBoard",
            Self::AddShape { .. } => "addShape",
            Self::UpdateShape { .. } => "updateShape",
            Self::DeleteShape { .. } => "deleteShape",
            Self::AddComment { .. } => "addComment",
            Self::ReadBoard { .. } => "board",
            Self::ReadComments { .. } => "comments",
            Self::ReadLayer { .. } => "layerShapes",
            Self::ReadMe => "me",
            Self::Subscribe { .. } => "subscribe",
        }
    }
}

/// Why the gate refused an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    Unauthenticated,
}

/// Outcome of [`authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Convert a denial into the matching [`CoreError`].
    pub fn into_result(self, action: Action) -> Result<(), CoreError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(DenyReason::Unauthenticated) => Err(CoreError::Unauthenticated(format!(
                "{} requires an authenticated user",
                action.name()
            ))),
        }
    }
}

/// Decide whether `identity` may perform `action`.
pub fn authorize(identity: Option<&Identity>, action: Action) -> Decision {
    if action.is_mutation() && identity.is_none() {
        return Decision::Deny(DenyReason::Unauthenticated);
    }
    Decision::Allow
}

/// Authorize a mutation and hand back the acting identity.
pub fn require_identity(identity: Option<&Identity>, action: Action) -> Result<Identity, CoreError> {
    authorize(identity, action).into_result(action)?;
    identity.copied().ok_or_else(|| {
        CoreError::Unauthenticated(format!("{} requires an authenticated user", action.name()))
    })
}
