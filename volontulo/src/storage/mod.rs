mod cache_store;
mod data_store;
mod errors;
mod schema_validation;
mod types;

/// Force both stores into existence so configuration errors surface at startup.
pub(crate) async fn init() -> Result<(), StorageError> {
    let cache = cache_store::GENERIC_CACHE_STORE.lock().await;
    let data = data_store::GENERIC_DATA_STORE.lock().await;
    tracing::info!(cache = %cache.kind(), data = %data.kind(), "Stores ready");

    Ok(())
}

pub(crate) use cache_store::GENERIC_CACHE_STORE;
pub use errors::StorageError;
pub(crate) use types::{CacheEntry, CacheNamespace};

pub(crate) use data_store::{GENERIC_DATA_STORE, table_name};

pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};
