//! Serde helpers shared by patch DTOs.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(value)`, including explicit `null`.
///
/// Pair with `#[serde(default)]` on an `Option<Option<T>>` field: an omitted
/// key stays `None` (leave untouched) while `null` becomes `Some(None)`
/// (clear the column).
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
