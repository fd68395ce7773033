use serde::{Serialize, de::DeserializeOwned};
use std::fmt;

use super::errors::StorageError;

/// Kinds of data kept in the cache store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CacheNamespace {
    /// Login sessions, keyed by session id
    Session,
}

impl CacheNamespace {
    fn as_str(self) -> &'static str {
        match self {
            CacheNamespace::Session => "session",
        }
    }

    /// Full cache key of `id` within this namespace
    pub(crate) fn key(self, id: &str) -> String {
        format!("volontulo:{}:{id}", self.as_str())
    }
}

impl fmt::Display for CacheNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON-encoded cache value
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CacheEntry(pub(crate) String);

impl CacheEntry {
    pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Self, StorageError> {
        Ok(Self(serde_json::to_string(value)?))
    }

    pub(crate) fn decode<T: DeserializeOwned>(&self) -> Result<T, StorageError> {
        Ok(serde_json::from_str(&self.0)?)
    }
}
