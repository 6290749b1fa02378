//! Cursor pagination envelope.
//!
//! A page is built from a look-ahead fetch: the backend returns up to
//! `first + 1` records positioned strictly after the cursor, and
//! [`Connection::from_lookahead`] trims the extra record and derives
//! `has_next_page` from its presence.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Page size used when the caller does not specify `first`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<T> {
    pub node: T,
    pub cursor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Build a page from up to `first + 1` fetched records.
    ///
    /// `cursor_of` yields the cursor for a record; the look-ahead record
    /// never becomes an edge and never supplies `end_cursor`.
    pub fn from_lookahead(
        mut records: Vec<T>,
        first: i64,
        cursor_of: impl Fn(&T) -> String,
    ) -> Self {
        let first = usize::try_from(first).unwrap_or(0);
        let has_next_page = records.len() > first;
        records.truncate(first);

        let edges: Vec<Edge<T>> = records
            .into_iter()
            .map(|node| Edge {
                cursor: cursor_of(&node),
                node,
            })
            .collect();
        let end_cursor = edges.last().map(|e| e.cursor.clone());

        Self {
            edges,
            page_info: PageInfo {
                has_next_page,
                end_cursor,
            },
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Connection<U> {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|e| Edge {
                    node: f(e.node),
                    cursor: e.cursor,
                })
                .collect(),
            page_info: self.page_info,
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Resolve the requested page size, applying the default.
pub fn resolve_page_size(first: Option<i64>) -> Result<i64, CoreError> {
    let first = first.unwrap_or(DEFAULT_PAGE_SIZE);
    if !(0..=MAX_PAGE_SIZE).contains(&first) {
        return Err(CoreError::Validation(format!(
            "first must be between 0 and {MAX_PAGE_SIZE}, got {first}"
        )));
    }
    Ok(first)
}

/// Encode a record id as a cursor.
pub fn encode_cursor(id: DbId) -> String {
    id.to_string()
}

/// Decode a cursor into a record id.
///
/// Malformed cursors decode to `None`, which callers treat the same as an
/// unknown cursor: the page starts at the beginning of the ordered set.
pub fn decode_cursor(cursor: Option<&str>) -> Option<DbId> {
    cursor.and_then(|c| c.trim().parse::<DbId>().ok())
}
