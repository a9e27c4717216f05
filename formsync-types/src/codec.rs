//! Serializer/deserializer contract and the default JSON codec.
//!
//! Custom codecs are supported as long as a serializer stays round-trippable
//! with its paired deserializer. Deserialization never fails loudly: any
//! malformed input maps to `None`, which callers treat as "no usable prior
//! state".

use crate::record::SerializedObject;

/// Renders a snapshot into its persisted textual form.
pub trait Serializer: Send + Sync {
    /// Serializes the ordered field records.
    fn serialize(&self, fields: &SerializedObject) -> String;
}

/// Parses a persisted textual form back into a snapshot.
pub trait Deserializer: Send + Sync {
    /// Deserializes the persisted text; `None` on any malformed input.
    fn deserialize(&self, raw: &str) -> Option<SerializedObject>;
}

/// The default codec: a JSON array of `{name, id, value}` objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Serializer for JsonCodec {
    fn serialize(&self, fields: &SerializedObject) -> String {
        // Vec<SerializedField> serialization cannot fail; fall back to an
        // empty array rather than panic if it somehow does.
        serde_json::to_string(fields).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Deserializer for JsonCodec {
    fn deserialize(&self, raw: &str) -> Option<SerializedObject> {
        serde_json::from_str(raw).ok()
    }
}
