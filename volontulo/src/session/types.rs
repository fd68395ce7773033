use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::errors::SessionError;
use crate::storage::CacheEntry;
use crate::userdb::User as DbUser;

/// The user behind a session, without credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(db_user: DbUser) -> Self {
        Self {
            id: db_user.id,
            email: db_user.email,
            created_at: db_user.created_at,
            updated_at: db_user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct StoredSession {
    pub(super) user_id: String,
    pub(super) expires_at: DateTime<Utc>,
    pub(super) ttl: u64,
}

impl TryFrom<&StoredSession> for CacheEntry {
    type Error = SessionError;

    fn try_from(session: &StoredSession) -> Result<Self, Self::Error> {
        Ok(CacheEntry::encode(session)?)
    }
}

impl TryFrom<CacheEntry> for StoredSession {
    type Error = SessionError;

    fn try_from(entry: CacheEntry) -> Result<Self, Self::Error> {
        Ok(entry.decode()?)
    }
}
