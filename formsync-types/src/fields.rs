//! Live form field model.
//!
//! A `FieldState` is a point-in-time snapshot of one control in the host
//! form, carrying everything the filter, serializer, and restore logic need.
//! The `FieldRef` inside it stays valid for the lifetime of the form and is
//! how the engine addresses the control later (listener attachment, restore
//! writes).

use std::fmt;
use std::sync::Arc;

/// Stable handle to one control in a form's field collection.
///
/// The index reflects encounter order in the form at the time the field was
/// added; it does not change when field values do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef(usize);

impl FieldRef {
    /// Creates a field ref from its encounter-order index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the encounter-order index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// The kind of form control, as far as sync semantics care.
///
/// Only the distinctions that change filtering, listen-event selection, or
/// value encoding are modeled; a password input is just `Text` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Single-line text-like input (text, password, email, ...).
    Text,
    /// Multi-line text area.
    TextArea,
    /// Checkbox — value serializes as the literal `"true"`/`"false"`.
    Checkbox,
    /// Radio button.
    Radio,
    /// Select / dropdown.
    Select,
    /// Generic button — never synced.
    Button,
    /// Submit control — never synced.
    Submit,
}

impl ControlKind {
    /// Whether this kind is a button-like control that never participates
    /// in sync.
    #[must_use]
    pub fn is_button_like(&self) -> bool {
        matches!(self, ControlKind::Button | ControlKind::Submit)
    }
}

/// Which event kind the engine listens for on a given control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenKind {
    /// Discrete state changes (checkbox, radio, select).
    Change,
    /// Continuous text edits (everything else).
    Input,
}

/// Snapshot of one live form control.
#[derive(Clone)]
pub struct FieldState {
    /// Stable handle for addressing this control later.
    pub field: FieldRef,
    /// The control's `id` attribute ("" when absent).
    pub id: String,
    /// The control's `name` attribute ("" when absent).
    pub name: String,
    /// Control kind.
    pub kind: ControlKind,
    /// Current textual value.
    pub value: String,
    /// Checked state — meaningful for `Checkbox` and `Radio` only.
    pub checked: bool,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Whether the control carries the no-sync marker.
    pub no_sync: bool,
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("field", &self.field)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &self.value)
            .field("checked", &self.checked)
            .field("disabled", &self.disabled)
            .field("no_sync", &self.no_sync)
            .finish()
    }
}

/// Predicate form of an exclude rule.
pub type ExcludePredicate = Arc<dyn Fn(&FieldState) -> bool + Send + Sync>;

/// A rule excluding fields from sync.
///
/// Dispatched by explicit discriminant: either an exact string compared
/// against a field's `id` and `name`, or a caller-supplied predicate over
/// the field snapshot.
#[derive(Clone)]
pub enum ExcludeRule {
    /// Excludes any field whose `id` or `name` equals the string exactly.
    Name(String),
    /// Excludes any field for which the predicate returns true.
    Predicate(ExcludePredicate),
}

impl ExcludeRule {
    /// Convenience constructor for the exact-match variant.
    pub fn name(s: impl Into<String>) -> Self {
        Self::Name(s.into())
    }

    /// Convenience constructor for the predicate variant.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&FieldState) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    /// Whether this rule matches the given field.
    #[must_use]
    pub fn matches(&self, field: &FieldState) -> bool {
        match self {
            ExcludeRule::Name(s) => *s == field.id || *s == field.name,
            ExcludeRule::Predicate(p) => p(field),
        }
    }
}

impl fmt::Debug for ExcludeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExcludeRule::Name(s) => f.debug_tuple("Name").field(s).finish(),
            ExcludeRule::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
