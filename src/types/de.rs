//! Serde helpers for sparse store documents

use serde::{Deserialize, Deserializer};

/// Explicit `null` deserializes the same as a missing key
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
