//! Field eligibility filtering.

use formsync_types::{ControlKind, ExcludeRule, FieldState, ListenKind};

/// Whether a control participates in sync.
///
/// Submit and button controls, disabled controls, controls carrying the
/// no-sync marker, and controls matching any exclude rule stay out of every
/// snapshot.
#[must_use]
pub fn is_syncable(field: &FieldState, rules: &[ExcludeRule]) -> bool {
    if field.kind.is_button_like() || field.disabled || field.no_sync {
        return false;
    }
    !rules.iter().any(|rule| rule.matches(field))
}

/// The event kind the engine listens for on a control of this kind:
/// discrete controls fire `Change`, text-like controls fire `Input`.
#[must_use]
pub fn listen_kind(kind: ControlKind) -> ListenKind {
    match kind {
        ControlKind::Checkbox | ControlKind::Radio | ControlKind::Select => ListenKind::Change,
        _ => ListenKind::Input,
    }
}
