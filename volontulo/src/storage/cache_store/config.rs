use std::{env, sync::LazyLock};
use tokio::sync::Mutex;

use super::types::{CacheStore, CacheStoreKind, InMemoryCacheStore, RedisCacheStore};

pub(crate) static GENERIC_CACHE_STORE_TYPE: LazyLock<String> = LazyLock::new(|| {
    env::var("GENERIC_CACHE_STORE_TYPE").unwrap_or_else(|_| "memory".to_string())
});

pub(crate) static GENERIC_CACHE_STORE_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("GENERIC_CACHE_STORE_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
});

/// Session cache shared by the whole process.
///
/// Panics on first use when the configured backend is unknown or unreachable.
pub(crate) static GENERIC_CACHE_STORE: LazyLock<Mutex<Box<dyn CacheStore>>> =
    LazyLock::new(|| {
        let kind = match GENERIC_CACHE_STORE_TYPE.parse::<CacheStoreKind>() {
            Ok(kind) => kind,
            Err(e) => panic!("{e}"),
        };

        tracing::info!("Initializing cache store with type: {}", kind);

        let store: Box<dyn CacheStore> = match kind {
            CacheStoreKind::Memory => Box::new(InMemoryCacheStore::new()),
            CacheStoreKind::Redis => {
                let store_url = GENERIC_CACHE_STORE_URL.as_str();
                let client = match redis::Client::open(store_url) {
                    Ok(client) => client,
                    Err(e) => {
                        tracing::error!("Failed to create Redis client: {}", e);
                        panic!("Failed to create Redis client: {e}");
                    }
                };
                let store = RedisCacheStore { client };
                if let Err(e) = tokio::task::block_in_place(|| {
                    tokio::runtime::Handle::current().block_on(store.init())
                }) {
                    tracing::error!("Failed to connect to Redis at {}: {}", store_url, e);
                    panic!("Failed to connect to Redis: {e}");
                }
                tracing::info!("Connected to Redis at {}", store_url);
                Box::new(store)
            }
        };

        Mutex::new(store)
    });
