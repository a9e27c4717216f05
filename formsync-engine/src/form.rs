//! The live-form seam.
//!
//! `FieldSource` abstracts over the host form: an ordered collection of
//! controls with ids, names, values, checked state, and a no-sync marker,
//! plus listener attachment and a submit chain. The engine only ever talks
//! to this trait, so any host (a real UI toolkit binding, a headless test
//! form) can drive it.

use async_trait::async_trait;
use formsync_types::{FieldRef, FieldState, ListenKind};
use std::future::Future;
use std::pin::Pin;
use tokio::sync::mpsc;

/// An event emitted by the form toward the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A syncable field fired its listen-kind event.
    Field(FieldRef),
    /// The form was submitted.
    Submit,
}

/// Channel the form delivers events through.
pub type EventSender = mpsc::UnboundedSender<FormEvent>;

/// Future type for pre-existing submit handlers.
pub type SubmitFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// One attached listener.
///
/// Holds the exact registration made at attach time; `detach` removes
/// precisely that registration, exactly once. A second `detach` (or the
/// drop after one) is a no-op, so disposal can never double-remove or
/// detach somebody else's listener.
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wraps the detach action for one registration.
    pub fn new(detach: impl FnOnce() + Send + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Detaches the listener. Idempotent.
    pub fn detach(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

/// The live ordered collection of form controls.
#[async_trait]
pub trait FieldSource: Send + Sync {
    /// The form's identity attribute (its id, else its first class name;
    /// "" when it has neither). Used for key derivation.
    fn identity(&self) -> String;

    /// Snapshot of every control, in encounter order.
    fn fields(&self) -> Vec<FieldState>;

    /// Assigns a control's textual value. Does not fire listeners.
    fn write_value(&self, field: FieldRef, value: &str);

    /// Assigns a control's checked state. Does not fire listeners.
    fn write_checked(&self, field: FieldRef, checked: bool);

    /// Attaches a listener for `kind` events on one control.
    fn subscribe(&self, field: FieldRef, kind: ListenKind, tx: EventSender) -> Subscription;

    /// Attaches a submit listener on the form.
    fn subscribe_submit(&self, tx: EventSender) -> Subscription;

    /// Runs any pre-existing submit handler bound to the form (sync or
    /// async) to completion.
    async fn run_submit_chain(&self);
}

/// An in-memory form for headless hosts and tests.
pub mod memory {
    use super::*;
    use crate::filter::listen_kind;
    use formsync_types::ControlKind;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Pre-existing submit handler: the form owner's own submit logic that
    /// must complete before the engine's submit action runs.
    pub type SubmitHandler = Arc<dyn Fn() -> SubmitFuture + Send + Sync>;

    /// Declarative description of one control, used to build a `MemoryForm`.
    #[derive(Debug, Clone)]
    pub struct FieldSpec {
        id: String,
        name: String,
        kind: ControlKind,
        value: String,
        checked: bool,
        disabled: bool,
        no_sync: bool,
    }

    impl FieldSpec {
        fn new(name: &str, kind: ControlKind) -> Self {
            Self {
                id: String::new(),
                name: name.to_string(),
                kind,
                value: String::new(),
                checked: false,
                disabled: false,
                no_sync: false,
            }
        }

        /// A text input.
        #[must_use]
        pub fn text(name: &str) -> Self {
            Self::new(name, ControlKind::Text)
        }

        /// A text area.
        #[must_use]
        pub fn textarea(name: &str) -> Self {
            Self::new(name, ControlKind::TextArea)
        }

        /// A checkbox, initially unchecked.
        #[must_use]
        pub fn checkbox(name: &str) -> Self {
            Self::new(name, ControlKind::Checkbox)
        }

        /// A radio button.
        #[must_use]
        pub fn radio(name: &str) -> Self {
            Self::new(name, ControlKind::Radio)
        }

        /// A select control.
        #[must_use]
        pub fn select(name: &str) -> Self {
            Self::new(name, ControlKind::Select)
        }

        /// A generic button.
        #[must_use]
        pub fn button(name: &str) -> Self {
            Self::new(name, ControlKind::Button)
        }

        /// A submit control.
        #[must_use]
        pub fn submit() -> Self {
            Self::new("", ControlKind::Submit)
        }

        /// Sets the id attribute.
        #[must_use]
        pub fn with_id(mut self, id: &str) -> Self {
            self.id = id.to_string();
            self
        }

        /// Sets the initial value.
        #[must_use]
        pub fn with_value(mut self, value: &str) -> Self {
            self.value = value.to_string();
            self
        }

        /// Sets the initial checked state.
        #[must_use]
        pub fn with_checked(mut self, checked: bool) -> Self {
            self.checked = checked;
            self
        }

        /// Marks the control disabled.
        #[must_use]
        pub fn disabled(mut self) -> Self {
            self.disabled = true;
            self
        }

        /// Marks the control with the no-sync marker.
        #[must_use]
        pub fn no_sync(mut self) -> Self {
            self.no_sync = true;
            self
        }
    }

    enum ListenTarget {
        Field(FieldRef, ListenKind),
        Submit,
    }

    struct ListenerEntry {
        target: ListenTarget,
        tx: EventSender,
    }

    /// A headless form: ordered controls, listener table, optional
    /// pre-existing submit handler.
    pub struct MemoryForm {
        identity: String,
        fields: Mutex<Vec<FieldSpec>>,
        listeners: Arc<Mutex<HashMap<u64, ListenerEntry>>>,
        next_listener: AtomicU64,
        submit_handler: Mutex<Option<SubmitHandler>>,
    }

    impl MemoryForm {
        /// Creates an empty form with the given identity attribute.
        #[must_use]
        pub fn new(identity: &str) -> Self {
            Self {
                identity: identity.to_string(),
                fields: Mutex::new(Vec::new()),
                listeners: Arc::new(Mutex::new(HashMap::new())),
                next_listener: AtomicU64::new(0),
                submit_handler: Mutex::new(None),
            }
        }

        /// Appends a control, builder style.
        #[must_use]
        pub fn field(self, spec: FieldSpec) -> Self {
            self.fields.lock().unwrap().push(spec);
            self
        }

        /// Looks up a control by name.
        #[must_use]
        pub fn find(&self, name: &str) -> Option<FieldRef> {
            self.fields
                .lock()
                .unwrap()
                .iter()
                .position(|f| f.name == name)
                .map(FieldRef::new)
        }

        /// Current value of a control.
        #[must_use]
        pub fn value(&self, field: FieldRef) -> String {
            self.fields.lock().unwrap()[field.index()].value.clone()
        }

        /// Current checked state of a control.
        #[must_use]
        pub fn checked(&self, field: FieldRef) -> bool {
            self.fields.lock().unwrap()[field.index()].checked
        }

        /// Sets whether a control is disabled.
        pub fn set_disabled(&self, field: FieldRef, disabled: bool) {
            self.fields.lock().unwrap()[field.index()].disabled = disabled;
        }

        /// Installs the form owner's own submit handler.
        pub fn on_submit(&self, handler: SubmitHandler) {
            *self.submit_handler.lock().unwrap() = Some(handler);
        }

        /// User edit: sets the value and fires the control's listeners.
        pub fn edit(&self, field: FieldRef, value: &str) {
            let kind = {
                let mut fields = self.fields.lock().unwrap();
                fields[field.index()].value = value.to_string();
                fields[field.index()].kind
            };
            self.dispatch_field(field, listen_kind(kind));
        }

        /// User toggle: sets checked state and fires the control's
        /// listeners.
        pub fn set_checked(&self, field: FieldRef, checked: bool) {
            let kind = {
                let mut fields = self.fields.lock().unwrap();
                fields[field.index()].checked = checked;
                fields[field.index()].kind
            };
            self.dispatch_field(field, listen_kind(kind));
        }

        /// Submits the form: fires every submit listener.
        pub fn submit(&self) {
            let listeners = self.listeners.lock().unwrap();
            for entry in listeners.values() {
                if matches!(entry.target, ListenTarget::Submit) {
                    let _ = entry.tx.send(FormEvent::Submit);
                }
            }
        }

        fn dispatch_field(&self, field: FieldRef, kind: ListenKind) {
            let listeners = self.listeners.lock().unwrap();
            for entry in listeners.values() {
                if let ListenTarget::Field(target, target_kind) = entry.target {
                    if target == field && target_kind == kind {
                        let _ = entry.tx.send(FormEvent::Field(field));
                    }
                }
            }
        }

        fn attach(&self, target: ListenTarget, tx: EventSender) -> Subscription {
            let id = self.next_listener.fetch_add(1, Ordering::SeqCst);
            self.listeners
                .lock()
                .unwrap()
                .insert(id, ListenerEntry { target, tx });

            // The subscription captures the listener id handed out at attach
            // time; detaching removes that registration and nothing else.
            let listeners = Arc::clone(&self.listeners);
            Subscription::new(move || {
                listeners.lock().unwrap().remove(&id);
            })
        }

        /// Number of currently attached listeners.
        #[must_use]
        pub fn listener_count(&self) -> usize {
            self.listeners.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl FieldSource for MemoryForm {
        fn identity(&self) -> String {
            self.identity.clone()
        }

        fn fields(&self) -> Vec<FieldState> {
            self.fields
                .lock()
                .unwrap()
                .iter()
                .enumerate()
                .map(|(i, f)| FieldState {
                    field: FieldRef::new(i),
                    id: f.id.clone(),
                    name: f.name.clone(),
                    kind: f.kind,
                    value: f.value.clone(),
                    checked: f.checked,
                    disabled: f.disabled,
                    no_sync: f.no_sync,
                })
                .collect()
        }

        fn write_value(&self, field: FieldRef, value: &str) {
            self.fields.lock().unwrap()[field.index()].value = value.to_string();
        }

        fn write_checked(&self, field: FieldRef, checked: bool) {
            self.fields.lock().unwrap()[field.index()].checked = checked;
        }

        fn subscribe(&self, field: FieldRef, kind: ListenKind, tx: EventSender) -> Subscription {
            self.attach(ListenTarget::Field(field, kind), tx)
        }

        fn subscribe_submit(&self, tx: EventSender) -> Subscription {
            self.attach(ListenTarget::Submit, tx)
        }

        async fn run_submit_chain(&self) {
            let handler = self.submit_handler.lock().unwrap().clone();
            if let Some(handler) = handler {
                handler().await;
            }
        }
    }
}
