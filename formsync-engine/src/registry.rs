//! Active storage-key registry.
//!
//! An explicit, injectable capability used solely for key-uniqueness
//! enforcement: the binding layer owns a registry and every engine started
//! against it registers its key for the engine's lifetime. No ambient
//! global state — tests can hand each engine its own registry.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Cloneable handle to a shared set of active storage keys.
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl KeyRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is currently registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.lock().expect("key registry poisoned").contains(key)
    }

    /// Registers `key`. Returns false if it was already registered; the
    /// check and the insert happen under one lock, so two concurrent
    /// registrations of the same key cannot both succeed.
    pub fn register(&self, key: &str) -> bool {
        self.keys
            .lock()
            .expect("key registry poisoned")
            .insert(key.to_string())
    }

    /// Unregisters `key`. Unregistering an absent key is a no-op.
    pub fn unregister(&self, key: &str) {
        self.keys.lock().expect("key registry poisoned").remove(key);
    }

    /// Number of active keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.lock().expect("key registry poisoned").len()
    }

    /// Whether no keys are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A registered key, held for the lifetime of one engine.
///
/// Dropping the registration releases the key. This also covers the
/// no-partial-registration rule: if Start fails or is abandoned after key
/// resolution, the guard unwinds the registry entry.
#[derive(Debug)]
pub struct KeyRegistration {
    key: String,
    registry: KeyRegistry,
}

impl KeyRegistration {
    pub(crate) fn new(key: String, registry: KeyRegistry) -> Self {
        Self { key, registry }
    }

    /// The registered key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for KeyRegistration {
    fn drop(&mut self) {
        self.registry.unregister(&self.key);
        debug!("released storage key: {}", self.key);
    }
}
