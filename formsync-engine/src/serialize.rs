//! Snapshot construction.

use crate::filter::is_syncable;
use formsync_types::{ControlKind, ExcludeRule, FieldState, SerializedField, SerializedObject};

/// Builds the serialized snapshot of the currently syncable field set, in
/// encounter order. Checkbox values encode as the literal `"true"` /
/// `"false"`; everything else keeps its textual value.
#[must_use]
pub fn snapshot(fields: &[FieldState], rules: &[ExcludeRule]) -> SerializedObject {
    fields
        .iter()
        .filter(|field| is_syncable(field, rules))
        .map(encode)
        .collect()
}

fn encode(field: &FieldState) -> SerializedField {
    let value = if field.kind == ControlKind::Checkbox {
        if field.checked { "true" } else { "false" }.to_string()
    } else {
        field.value.clone()
    };
    SerializedField {
        name: field.name.clone(),
        id: field.id.clone(),
        value,
    }
}
