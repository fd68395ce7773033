use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

use crate::storage::errors::StorageError;
use crate::storage::types::{CacheEntry, CacheNamespace};

use super::types::{CacheStore, CacheStoreKind, InMemoryCacheStore};

impl InMemoryCacheStore {
    pub(crate) fn new() -> Self {
        tracing::info!("Creating in-memory session cache");
        Self {
            entries: HashMap::new(),
        }
    }

    fn expiry_after(ttl_secs: u64) -> Result<DateTime<Utc>, StorageError> {
        i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| StorageError::Storage(format!("TTL out of range: {ttl_secs}")))
    }

    fn purge_expired(&mut self) {
        let now = Utc::now();
        self.entries.retain(|_, (_, expires_at)| *expires_at > now);
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    fn kind(&self) -> CacheStoreKind {
        CacheStoreKind::Memory
    }

    async fn init(&self) -> Result<(), StorageError> {
        Ok(())
    }

    async fn put(
        &mut self,
        namespace: CacheNamespace,
        id: &str,
        entry: CacheEntry,
        ttl_secs: u64,
    ) -> Result<(), StorageError> {
        let expires_at = Self::expiry_after(ttl_secs)?;
        // Sessions are never swept otherwise
        self.purge_expired();
        self.entries.insert(namespace.key(id), (entry, expires_at));
        Ok(())
    }

    async fn get(
        &self,
        namespace: CacheNamespace,
        id: &str,
    ) -> Result<Option<CacheEntry>, StorageError> {
        Ok(self
            .entries
            .get(&namespace.key(id))
            .filter(|(_, expires_at)| *expires_at > Utc::now())
            .map(|(entry, _)| entry.clone()))
    }

    async fn remove(&mut self, namespace: CacheNamespace, id: &str) -> Result<(), StorageError> {
        self.entries.remove(&namespace.key(id));
        Ok(())
    }
}
