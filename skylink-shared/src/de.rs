//! Deserialization helpers for client-supplied query parameters.

use serde::de::value::StringDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer};

/// Reads an optional parameter, treating an empty value (`?origin=`) as absent.
///
/// Use with `#[serde(default, deserialize_with = "empty_as_none")]`.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => {
            let value: StringDeserializer<D::Error> = raw.into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}
