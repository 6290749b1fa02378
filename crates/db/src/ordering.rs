//! Canonical orderings for in-process record sets.
//!
//! These mirror the `ORDER BY` clauses in the repository layer so that every
//! backend yields identical sequences.

use drawboard_core::types::DbId;

use crate::models::comment::Comment;
use crate::models::layer::Layer;
use crate::models::shape::Shape;

/// Sort shapes by z-index, then creation time, then id (all ascending).
pub fn sort_shapes(shapes: &mut [Shape]) {
    shapes.sort_by(|a, b| {
        (a.z_index, a.created_at, a.id).cmp(&(b.z_index, b.created_at, b.id))
    });
}

/// Sort layers by ascending order. Stable, so equal orders keep their
/// relative position; ids break remaining ties.
pub fn sort_layers(layers: &mut [Layer]) {
    layers.sort_by_key(|l| (l.order, l.id));
}

/// Sort comments newest first; ids break ties between equal timestamps.
pub fn sort_comments_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
}

/// The part of a newest-first comment feed strictly after `after`.
///
/// An `after` that is not in the feed yields the whole feed.
pub fn comments_after(sorted: &[Comment], after: Option<DbId>) -> &[Comment] {
    match after.and_then(|id| sorted.iter().position(|c| c.id == id)) {
        Some(index) => &sorted[index + 1..],
        None => sorted,
    }
}
