use async_trait::async_trait;
use redis::AsyncCommands;

use crate::storage::errors::StorageError;
use crate::storage::types::{CacheEntry, CacheNamespace};

use super::types::{CacheStore, CacheStoreKind, RedisCacheStore};

impl RedisCacheStore {
    async fn connection(&self) -> Result<redis::aio::MultiplexedConnection, StorageError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

/// Redis keeps the TTL itself, so expired sessions simply disappear.
#[async_trait]
impl CacheStore for RedisCacheStore {
    fn kind(&self) -> CacheStoreKind {
        CacheStoreKind::Redis
    }

    async fn init(&self) -> Result<(), StorageError> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    async fn put(
        &mut self,
        namespace: CacheNamespace,
        id: &str,
        entry: CacheEntry,
        ttl_secs: u64,
    ) -> Result<(), StorageError> {
        let mut conn = self.connection().await?;
        let _: () = conn.set_ex(namespace.key(id), entry.0, ttl_secs).await?;
        Ok(())
    }

    async fn get(
        &self,
        namespace: CacheNamespace,
        id: &str,
    ) -> Result<Option<CacheEntry>, StorageError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(namespace.key(id)).await?;
        Ok(value.map(CacheEntry))
    }

    async fn remove(&mut self, namespace: CacheNamespace, id: &str) -> Result<(), StorageError> {
        let mut conn = self.connection().await?;
        let _: () = conn.del(namespace.key(id)).await?;
        Ok(())
    }
}
