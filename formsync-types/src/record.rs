//! Persisted field records.
//!
//! The wire shape is an ordered sequence of `{name, id, value}` records,
//! order being encounter order in the form at serialization time. Values
//! are always textual; checkbox state is encoded as the literal strings
//! `"true"` / `"false"`.

use serde::{Deserialize, Serialize};

/// One synced control's persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedField {
    /// The control's `name` attribute ("" when absent).
    pub name: String,
    /// The control's `id` attribute ("" when absent).
    pub id: String,
    /// Textual value; `"true"`/`"false"` for checkboxes.
    pub value: String,
}

impl SerializedField {
    /// Creates a record.
    pub fn new(name: impl Into<String>, id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            value: value.into(),
        }
    }
}

/// An ordered sequence of serialized fields — one form's snapshot.
pub type SerializedObject = Vec<SerializedField>;
