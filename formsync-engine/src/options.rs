//! Engine configuration.

use formsync_storage::StorageChoice;
use formsync_types::{Deserializer, ExcludeRule, JsonCodec, SerializedObject, Serializer};
use std::fmt;
use std::sync::Arc;

/// Callback receiving a snapshot (`on_save`, `on_restore`).
pub type SnapshotCallback = Arc<dyn Fn(&SerializedObject) + Send + Sync>;

/// Callback fired after a submit-triggered clear.
pub type ClearCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for one engine. Every field is optional; defaults match
/// the unconfigured behavior: session storage, 300 ms quiet period, restore
/// on load, no clear on submit.
#[derive(Clone, Default)]
pub struct SyncOptions {
    /// Explicit storage key; the form's identity attribute when absent.
    pub key: Option<String>,
    /// Backend selection.
    pub storage: StorageChoice,
    /// Quiet period in milliseconds. `None` means 300.
    pub debounce: Option<u64>,
    /// Rules excluding fields from sync.
    pub exclude: Vec<ExcludeRule>,
    /// Restore persisted state at start. `None` means true.
    pub restore_on_load: Option<bool>,
    /// Remove the persisted record on submit.
    pub clear_on_submit: bool,
    /// Custom serializer; the JSON codec when absent.
    pub serializer: Option<Arc<dyn Serializer>>,
    /// Custom deserializer; the JSON codec when absent. Must round-trip
    /// with the paired serializer.
    pub deserializer: Option<Arc<dyn Deserializer>>,
    /// Invoked with each snapshot just saved.
    pub on_save: Option<SnapshotCallback>,
    /// Invoked with the deserialized snapshot once restore completes.
    pub on_restore: Option<SnapshotCallback>,
    /// Invoked after a submit-triggered clear.
    pub on_clear: Option<ClearCallback>,
}

impl SyncOptions {
    /// Sets an explicit storage key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Selects the storage backend.
    #[must_use]
    pub fn with_storage(mut self, storage: StorageChoice) -> Self {
        self.storage = storage;
        self
    }

    /// Sets the quiet period in milliseconds.
    #[must_use]
    pub fn with_debounce(mut self, millis: u64) -> Self {
        self.debounce = Some(millis);
        self
    }

    /// Adds an exclude rule.
    #[must_use]
    pub fn with_exclude(mut self, rule: ExcludeRule) -> Self {
        self.exclude.push(rule);
        self
    }

    /// Enables or disables restore at start.
    #[must_use]
    pub fn with_restore_on_load(mut self, restore: bool) -> Self {
        self.restore_on_load = Some(restore);
        self
    }

    /// Enables or disables clearing the record on submit.
    #[must_use]
    pub fn with_clear_on_submit(mut self, clear: bool) -> Self {
        self.clear_on_submit = clear;
        self
    }

    /// Installs a custom serializer.
    #[must_use]
    pub fn with_serializer(mut self, serializer: Arc<dyn Serializer>) -> Self {
        self.serializer = Some(serializer);
        self
    }

    /// Installs a custom deserializer.
    #[must_use]
    pub fn with_deserializer(mut self, deserializer: Arc<dyn Deserializer>) -> Self {
        self.deserializer = Some(deserializer);
        self
    }

    /// Installs the saved-snapshot callback.
    #[must_use]
    pub fn on_save<F>(mut self, f: F) -> Self
    where
        F: Fn(&SerializedObject) + Send + Sync + 'static,
    {
        self.on_save = Some(Arc::new(f));
        self
    }

    /// Installs the restored-snapshot callback.
    #[must_use]
    pub fn on_restore<F>(mut self, f: F) -> Self
    where
        F: Fn(&SerializedObject) + Send + Sync + 'static,
    {
        self.on_restore = Some(Arc::new(f));
        self
    }

    /// Installs the cleared callback.
    #[must_use]
    pub fn on_clear<F>(mut self, f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_clear = Some(Arc::new(f));
        self
    }

    /// Effective quiet period.
    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce.unwrap_or(300)
    }

    /// Effective restore-at-start flag.
    #[must_use]
    pub fn restores_on_load(&self) -> bool {
        self.restore_on_load.unwrap_or(true)
    }

    /// Effective serializer.
    #[must_use]
    pub fn serializer(&self) -> Arc<dyn Serializer> {
        self.serializer
            .clone()
            .unwrap_or_else(|| Arc::new(JsonCodec))
    }

    /// Effective deserializer.
    #[must_use]
    pub fn deserializer(&self) -> Arc<dyn Deserializer> {
        self.deserializer
            .clone()
            .unwrap_or_else(|| Arc::new(JsonCodec))
    }
}

impl fmt::Debug for SyncOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncOptions")
            .field("key", &self.key)
            .field("storage", &self.storage)
            .field("debounce", &self.debounce)
            .field("exclude", &self.exclude)
            .field("restore_on_load", &self.restore_on_load)
            .field("clear_on_submit", &self.clear_on_submit)
            .field("serializer", &self.serializer.as_ref().map(|_| ".."))
            .field("deserializer", &self.deserializer.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}
