//! In-memory store — the session-storage analogue.

use crate::adapter::StorageAdapter;
use crate::error::StorageResult;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-lifetime key/value store.
///
/// Records live until the process exits or the key is removed. This is the
/// default backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl StorageAdapter for MemoryStore {
    async fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        self.records
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn load(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.records.write().await.remove(key);
        Ok(())
    }
}
