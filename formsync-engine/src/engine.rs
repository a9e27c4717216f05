//! The sync engine — restore → listen → persist/clear lifecycle.
//!
//! One engine serves one form. `SyncEngine::start` runs key and backend
//! resolution, the optional restore, and listener attachment, then hands
//! back a `SyncHandle` whose `dispose` detaches everything exactly once.
//! The engine is the only stateful component; everything it orchestrates
//! (filter, codec, debouncer, backend) is stateless or self-contained.

use crate::debounce::Debouncer;
use crate::error::ConfigResult;
use crate::filter::{is_syncable, listen_kind};
use crate::form::{FieldSource, FormEvent, Subscription};
use crate::keys::resolve_key;
use crate::options::SyncOptions;
use crate::registry::{KeyRegistration, KeyRegistry};
use crate::restore::apply_snapshot;
use crate::serialize::snapshot;
use formsync_storage::{resolve, BackendHandle};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Engine lifecycle states. Transitions are one-way; `Disposed` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Created, nothing resolved yet.
    Uninitialized,
    /// Loading and applying the persisted snapshot.
    Restoring,
    /// Listeners attached, persisting on edits.
    Listening,
    /// Listeners detached, key released.
    Disposed,
}

/// Everything the persist and submit actions need, shared with the event
/// loop.
struct EngineShared {
    form: Arc<dyn FieldSource>,
    backend: BackendHandle,
    options: SyncOptions,
    key: String,
}

impl EngineShared {
    /// The persist action: re-filter and re-serialize the current full
    /// syncable field set, save it, then report it.
    async fn persist(&self) {
        let snap = snapshot(&self.form.fields(), &self.options.exclude);
        let text = self.options.serializer().serialize(&snap);
        self.backend.save(&self.key, &text).await;
        debug!("persisted {} field(s) under key {}", snap.len(), self.key);
        if let Some(on_save) = &self.options.on_save {
            on_save(&snap);
        }
    }

    /// The submit action: let the form owner's own submit handler finish
    /// first, then clear if configured. The clear never schedules a
    /// persist of its own.
    async fn handle_submit(&self) {
        self.form.run_submit_chain().await;

        if self.options.clear_on_submit {
            self.backend.remove(&self.key).await;
            info!("cleared persisted record for key {}", self.key);
            if let Some(on_clear) = &self.options.on_clear {
                on_clear();
            }
        }
    }

    /// The restore step. Absent or malformed data is the normal first-use
    /// case: log and move on to listening.
    async fn restore(&self) {
        let Some(raw) = self.backend.load(&self.key).await else {
            debug!("no persisted record for key {}, skipping restore", self.key);
            return;
        };

        let Some(records) = self.options.deserializer().deserialize(&raw) else {
            warn!(
                "persisted record for key {} did not deserialize, skipping restore",
                self.key
            );
            return;
        };

        apply_snapshot(&*self.form, &records);
        debug!("restored {} record(s) for key {}", records.len(), self.key);
        if let Some(on_restore) = &self.options.on_restore {
            on_restore(&records);
        }
    }
}

/// The sync engine. Construct-and-run: `start` performs the whole
/// Uninitialized → Restoring → Listening walk and returns the handle.
pub struct SyncEngine;

impl SyncEngine {
    /// Starts an engine for one form.
    ///
    /// Resolves the storage key (explicit option, else the form's identity)
    /// and the backend; a [`ConfigError`](crate::ConfigError) aborts with
    /// zero listeners attached and no surviving key registration. Restore
    /// runs to completion before any listener is attached, so no edit can
    /// race it. Abandoning the returned future mid-start leaves nothing
    /// attached either — the key registration unwinds on drop.
    pub async fn start(
        form: Arc<dyn FieldSource>,
        options: SyncOptions,
        registry: &KeyRegistry,
    ) -> ConfigResult<SyncHandle> {
        debug!(
            "starting engine for form {:?} ({:?})",
            form.identity(),
            EngineState::Uninitialized
        );

        let registration = resolve_key(&form.identity(), options.key.as_deref(), registry)?;
        let backend = resolve(&options.storage);
        let key = registration.key().to_string();

        let shared = Arc::new(EngineShared {
            form,
            backend,
            options,
            key,
        });

        if shared.options.restores_on_load() {
            debug!("{:?} key {}", EngineState::Restoring, shared.key);
            shared.restore().await;
        }

        // Listener attachment happens only after restore has completed or
        // been skipped.
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subscriptions = Vec::new();
        for field in shared.form.fields() {
            if is_syncable(&field, &shared.options.exclude) {
                subscriptions.push(shared.form.subscribe(
                    field.field,
                    listen_kind(field.kind),
                    tx.clone(),
                ));
            }
        }
        subscriptions.push(shared.form.subscribe_submit(tx));

        let debouncer = Debouncer::new(Duration::from_millis(shared.options.debounce_ms()));
        let task = tokio::spawn(event_loop(rx, Arc::clone(&shared), debouncer));

        info!(
            "engine {:?} for key {} ({} listener(s))",
            EngineState::Listening,
            shared.key,
            subscriptions.len()
        );

        Ok(SyncHandle {
            key: shared.key.clone(),
            inner: Some(HandleInner {
                subscriptions,
                task,
                registration,
            }),
        })
    }
}

/// Consumes form events until every sender is gone or the loop is aborted.
async fn event_loop(
    mut rx: mpsc::UnboundedReceiver<FormEvent>,
    shared: Arc<EngineShared>,
    mut debouncer: Debouncer,
) {
    while let Some(event) = rx.recv().await {
        match event {
            FormEvent::Field(field) => {
                debug!("edit on {} for key {}", field, shared.key);
                let shared = Arc::clone(&shared);
                debouncer.trigger(async move { shared.persist().await });
            }
            FormEvent::Submit => {
                debug!("submit for key {}", shared.key);
                shared.handle_submit().await;
            }
        }
    }
}

/// Parts released on disposal.
struct HandleInner {
    subscriptions: Vec<Subscription>,
    task: JoinHandle<()>,
    registration: KeyRegistration,
}

/// Handle to a listening engine. Exists only once Listening is reached.
///
/// `dispose` (or drop) detaches every listener attached at start — the
/// exact subscriptions, not reconstructions — aborts the event loop along
/// with any pending persist, and releases the key. Terminal: a disposed
/// handle stays disposed.
pub struct SyncHandle {
    key: String,
    inner: Option<HandleInner>,
}

impl SyncHandle {
    /// The resolved storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current state: `Listening` until disposed.
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.inner.is_some() {
            EngineState::Listening
        } else {
            EngineState::Disposed
        }
    }

    /// Whether the engine has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.is_none()
    }

    /// Detaches all listeners and releases the key. A second call is a
    /// no-op; nothing reattaches and nothing double-removes.
    pub fn dispose(&mut self) {
        let Some(mut inner) = self.inner.take() else {
            return;
        };
        for subscription in &mut inner.subscriptions {
            subscription.detach();
        }
        inner.task.abort();
        drop(inner.registration);
        info!("engine {:?} for key {}", EngineState::Disposed, self.key);
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for SyncHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncHandle")
            .field("key", &self.key)
            .field("state", &self.state())
            .finish()
    }
}
