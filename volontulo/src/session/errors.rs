use thiserror::Error;

use crate::storage::StorageError;
use crate::userdb::UserError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// No session under this id, or its user no longer exists
    #[error("Session not found")]
    NotFound,

    #[error("Session expired")]
    Expired,

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Cookie header error: {0}")]
    Cookie(String),

    /// Session settings that cannot be applied, such as an unrepresentable max age
    #[error("Session configuration error: {0}")]
    Config(String),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),

    /// Error from user database operations
    #[error("User error: {0}")]
    User(#[from] UserError),
}
