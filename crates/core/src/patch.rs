//! Tri-state field wrapper for partial-update payloads.
//!
//! A plain `Option<T>` cannot tell "key omitted" apart from "key sent as
//! `null`": serde maps both to `None`. [`Patch`] keeps the two apart so a
//! caller can clear a nullable column without touching the others.
//!
//! Struct fields of this type must carry `#[serde(default)]` (or the struct
//! must), otherwise a missing key is a decode error instead of [`Patch::Absent`].

use serde::{Deserialize, Deserializer};

/// A single field of a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    /// Key not present in the request. Leave the stored value unchanged.
    #[default]
    Absent,
    /// Key present with a JSON `null`. Clear the stored value.
    Null,
    /// Key present with a value. Overwrite the stored value.
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Collapse into the nested-option form used when building statements.
    ///
    /// `None` means "not supplied", `Some(None)` means "set to NULL".
    pub fn as_update(&self) -> Option<Option<&T>> {
        match self {
            Patch::Absent => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v)),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only called when the key is present, so `None` here is an explicit null.
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
