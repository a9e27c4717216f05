//! The failure-swallowing backend boundary.

use crate::adapter::StorageAdapter;
use std::sync::Arc;
use tracing::warn;

/// Engine-facing wrapper around a storage adapter.
///
/// Every backend failure stops here: a failed save is dropped, a failed
/// load reads as absent, a failed remove is skipped. Each is logged so the
/// diagnostic channel still sees it.
#[derive(Clone)]
pub struct BackendHandle {
    adapter: Arc<dyn StorageAdapter>,
}

impl BackendHandle {
    /// Wraps an adapter.
    #[must_use]
    pub fn new(adapter: Arc<dyn StorageAdapter>) -> Self {
        Self { adapter }
    }

    /// Persists `value` under `key`; failures are logged and dropped.
    pub async fn save(&self, key: &str, value: &str) {
        if let Err(e) = self.adapter.save(key, value).await {
            warn!("failed to save record for key {}: {}", key, e);
        }
    }

    /// Loads the record under `key`; failures are logged and read as absent.
    pub async fn load(&self, key: &str) -> Option<String> {
        match self.adapter.load(key).await {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to load record for key {}: {}", key, e);
                None
            }
        }
    }

    /// Removes the record under `key`; failures are logged and skipped.
    pub async fn remove(&self, key: &str) {
        if let Err(e) = self.adapter.remove(key).await {
            warn!("failed to remove record for key {}: {}", key, e);
        }
    }
}
