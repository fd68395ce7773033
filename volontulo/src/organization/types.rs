use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Entity posting offers and represented by user profiles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating an organization; the id is assigned by the database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewOrganization {
    pub name: String,
    pub address: String,
    pub description: String,
}
