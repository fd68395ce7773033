use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum OfferError {
    #[error("Offer not found")]
    NotFound,

    #[error("Organization not found: {0}")]
    OrganizationNotFound(i64),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),
}

impl OfferError {
    /// Maps a database error, turning foreign-key violations into `OrganizationNotFound`.
    pub(crate) fn from_sqlx(err: sqlx::Error, organization_id: i64) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::OrganizationNotFound(organization_id)
            }
            _ => Self::Storage(err.to_string()),
        }
    }
}
