use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::storage::errors::StorageError;
use crate::storage::types::{CacheEntry, CacheNamespace};

/// Backend selected by `GENERIC_CACHE_STORE_TYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CacheStoreKind {
    Memory,
    Redis,
}

impl FromStr for CacheStoreKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            t => Err(StorageError::Config(format!(
                "Unsupported cache store type: {t}. Supported types are 'memory' and 'redis'"
            ))),
        }
    }
}

impl fmt::Display for CacheStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => f.write_str("memory"),
            Self::Redis => f.write_str("redis"),
        }
    }
}

/// Process-local cache; entries carry their expiry time
pub(crate) struct InMemoryCacheStore {
    pub(super) entries: HashMap<String, (CacheEntry, DateTime<Utc>)>,
}

pub(crate) struct RedisCacheStore {
    pub(super) client: redis::Client,
}

#[async_trait]
pub(crate) trait CacheStore: Send + Sync + 'static {
    fn kind(&self) -> CacheStoreKind;

    /// Check that the backend is reachable.
    async fn init(&self) -> Result<(), StorageError>;

    /// Store `entry` under `id`. It expires after `ttl_secs` seconds.
    async fn put(
        &mut self,
        namespace: CacheNamespace,
        id: &str,
        entry: CacheEntry,
        ttl_secs: u64,
    ) -> Result<(), StorageError>;

    /// Expired entries are reported as missing.
    async fn get(
        &self,
        namespace: CacheNamespace,
        id: &str,
    ) -> Result<Option<CacheEntry>, StorageError>;

    async fn remove(&mut self, namespace: CacheNamespace, id: &str) -> Result<(), StorageError>;
}
