//! The storage adapter contract.
//!
//! Backends implement `StorageAdapter`; callers select one through the
//! `StorageChoice` tagged union, dispatched by explicit discriminant rather
//! than runtime type inspection.

use crate::error::StorageResult;
use crate::file::FileStore;
use crate::handle::BackendHandle;
use crate::memory::MemoryStore;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// A persistence backend keyed by storage key.
///
/// Each operation may suspend. Implementations are expected to contain
/// their own medium's failures; anything they do return as `Err` is caught
/// and logged at the `BackendHandle` boundary and degrades to a no-op.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Persists `value` under `key`, overwriting any previous record.
    async fn save(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Loads the record under `key`; `None` when absent.
    async fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Removes the record under `key`. Removing an absent key is not an
    /// error.
    async fn remove(&self, key: &str) -> StorageResult<()>;
}

/// Backend selection.
#[derive(Clone, Default)]
pub enum StorageChoice {
    /// Process-lifetime in-memory store. The default.
    #[default]
    Session,
    /// Cross-session file store rooted at the given directory.
    Local(PathBuf),
    /// Caller-supplied adapter.
    Custom(Arc<dyn StorageAdapter>),
}

impl fmt::Debug for StorageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageChoice::Session => f.write_str("Session"),
            StorageChoice::Local(dir) => f.debug_tuple("Local").field(dir).finish(),
            StorageChoice::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// The shared session store.
///
/// Session storage is ambient: every engine in the process that picks
/// `StorageChoice::Session` sees the same map, so an engine restarted with
/// the same key within the process lifetime can restore.
fn session_store() -> Arc<MemoryStore> {
    static STORE: OnceLock<Arc<MemoryStore>> = OnceLock::new();
    STORE.get_or_init(|| Arc::new(MemoryStore::new())).clone()
}

/// Resolves a backend choice into the handle the engine talks to.
#[must_use]
pub fn resolve(choice: &StorageChoice) -> BackendHandle {
    match choice {
        StorageChoice::Session => BackendHandle::new(session_store()),
        StorageChoice::Local(dir) => BackendHandle::new(Arc::new(FileStore::new(dir.clone()))),
        StorageChoice::Custom(adapter) => BackendHandle::new(adapter.clone()),
    }
}
