use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum StorageError {
    /// Backend failure: connection, query or command
    #[error("Storage error: {0}")]
    Storage(String),

    /// Cached value that is not valid JSON for the expected type
    #[error("Json conversion(Serde) error: {0}")]
    Serde(String),

    /// Unknown store type or malformed store URL
    #[error("Store configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for StorageError {
    fn from(err: redis::RedisError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}
