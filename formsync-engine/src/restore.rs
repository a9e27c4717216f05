//! Applying a persisted snapshot to live fields.

use crate::form::FieldSource;
use formsync_types::{ControlKind, SerializedObject};
use tracing::debug;

/// Applies each record to the live form.
///
/// A record's target is located first by exact name match, else by id
/// match; empty attributes never match. Found fields get the textual value
/// assigned, and checkbox-kind fields additionally get their checked state
/// set by comparing the value to `"true"`. A record naming no live field is
/// skipped individually; the rest still apply.
pub(crate) fn apply_snapshot(form: &dyn FieldSource, records: &SerializedObject) {
    let live = form.fields();

    for record in records {
        let target = live
            .iter()
            .find(|f| !record.name.is_empty() && f.name == record.name)
            .or_else(|| live.iter().find(|f| !record.id.is_empty() && f.id == record.id));

        let Some(field) = target else {
            debug!(
                "no live field for persisted record (name: {:?}, id: {:?}), skipping",
                record.name, record.id
            );
            continue;
        };

        form.write_value(field.field, &record.value);
        if field.kind == ControlKind::Checkbox {
            form.write_checked(field.field, record.value == "true");
        }
    }
}
