use sqlx::{Pool, Postgres, Sqlite};
use std::fmt;
use std::str::FromStr;

use crate::storage::errors::StorageError;

/// Backend selected by `GENERIC_DATA_STORE_TYPE`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DataStoreKind {
    Sqlite,
    Postgres,
}

impl FromStr for DataStoreKind {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(Self::Sqlite),
            "postgres" => Ok(Self::Postgres),
            t => Err(StorageError::Config(format!(
                "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
            ))),
        }
    }
}

impl fmt::Display for DataStoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Postgres => f.write_str("postgres"),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct SqliteDataStore {
    pub(super) pool: sqlx::SqlitePool,
}

#[derive(Clone, Debug)]
pub(crate) struct PostgresDataStore {
    pub(super) pool: sqlx::PgPool,
}

/// Relational backend holding users, organizations and offers.
///
/// Stores pick their SQL dialect by asking for the concrete pool.
pub(crate) trait DataStore: Send + Sync {
    fn kind(&self) -> DataStoreKind;
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>>;
    fn as_postgres(&self) -> Option<&Pool<Postgres>>;
}

impl DataStore for SqliteDataStore {
    fn kind(&self) -> DataStoreKind {
        DataStoreKind::Sqlite
    }

    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        Some(&self.pool)
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        None
    }
}

impl DataStore for PostgresDataStore {
    fn kind(&self) -> DataStoreKind {
        DataStoreKind::Postgres
    }

    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        None
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        Some(&self.pool)
    }
}
