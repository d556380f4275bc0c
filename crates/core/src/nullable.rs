//! Serde helper for PATCH payloads that need to tell "absent" from `null`.
//!
//! Plain `Option<Option<T>>` collapses `null` into the outer `None`. Fields
//! annotated with
//! `#[serde(default, deserialize_with = "carhire_core::nullable::deserialize")]`
//! come out as:
//!
//! - field missing      -> `None` (leave the column untouched)
//! - field is `null`    -> `Some(None)` (clear the column)
//! - field has a value  -> `Some(Some(v))`

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
