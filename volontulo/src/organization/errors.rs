use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum OrganizationError {
    #[error("Organization not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}
