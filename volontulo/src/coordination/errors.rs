//! Error types for the coordination layer

use thiserror::Error;

use crate::offer::OfferError;
use crate::organization::OrganizationError;
use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Errors that can occur while coordinating stores, sessions and permissions
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// General coordination error
    #[error("Coordination error: {0}")]
    Coordination(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// No valid session
    #[error("Unauthorized access")]
    Unauthorized,

    /// Valid session without the required privilege
    #[error("Forbidden")]
    Forbidden,

    /// Conflict error
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Rejected user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found with context
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from the user database operations
    #[error("User error: {0}")]
    UserError(UserError),

    /// Error from organization operations
    #[error("Organization error: {0}")]
    OrganizationError(OrganizationError),

    /// Error from offer operations
    #[error("Offer error: {0}")]
    OfferError(OfferError),

    /// Error from Session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    ///
    /// This method logs the error with appropriate context and returns self,
    /// allowing for method chaining and explicit logging when needed.
    pub fn log(self) -> Self {
        match &self {
            Self::Coordination(msg) => tracing::error!("Coordination error: {}", msg),
            Self::Database(msg) => tracing::error!("Database error: {}", msg),
            Self::Authentication(msg) => tracing::warn!("Authentication error: {}", msg),
            Self::Unauthorized => tracing::warn!("Unauthorized access"),
            Self::Forbidden => tracing::warn!("Forbidden"),
            Self::Conflict(message) => tracing::warn!("Conflict: {}", message),
            Self::InvalidInput(message) => tracing::warn!("Invalid input: {}", message),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::warn!("Resource not found: {} {}", resource_type, resource_id),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::OrganizationError(err) => tracing::error!("Organization error: {}", err),
            Self::OfferError(err) => tracing::error!("Offer error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }

    pub(crate) fn not_found(resource_type: &str, resource_id: impl ToString) -> Self {
        Self::ResourceNotFound {
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
        }
    }
}

// Custom From implementations that automatically log errors

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        let error = match err {
            UserError::Conflict(msg) => Self::Conflict(msg),
            other => Self::UserError(other),
        };
        tracing::error!("{}", error);
        error
    }
}

impl From<OrganizationError> for CoordinationError {
    fn from(err: OrganizationError) -> Self {
        let error = Self::OrganizationError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<OfferError> for CoordinationError {
    fn from(err: OfferError) -> Self {
        let error = match err {
            OfferError::OrganizationNotFound(id) => Self::not_found("Organization", id),
            other => Self::OfferError(other),
        };
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        let error = Self::UtilsError(err);
        tracing::error!("{}", error);
        error
    }
}
