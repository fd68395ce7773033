use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Authentication identity. The email doubles as the login name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Login email, unique across users
    pub email: String,
    /// Encoded PBKDF2 hash, never serialized
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a freshly generated id
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Application-level profile wrapping a [`User`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub is_administrator: bool,
    /// Organizations this profile represents
    pub organization_ids: Vec<i64>,
}

impl UserProfile {
    pub fn volunteer(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            is_administrator: false,
            organization_ids: Vec::new(),
        }
    }

    pub fn role(&self) -> Role {
        if self.is_administrator {
            Role::Administrator
        } else if !self.organization_ids.is_empty() {
            Role::Organization
        } else {
            Role::Volunteer
        }
    }

    pub fn represents(&self, organization_id: i64) -> bool {
        self.organization_ids.contains(&organization_id)
    }
}

#[derive(Debug, Clone, FromRow)]
pub(crate) struct ProfileRow {
    pub(crate) user_id: String,
    pub(crate) is_administrator: bool,
}

impl ProfileRow {
    pub(crate) fn into_profile(self, organization_ids: Vec<i64>) -> UserProfile {
        UserProfile {
            user_id: self.user_id,
            is_administrator: self.is_administrator,
            organization_ids,
        }
    }
}

/// Role of a requester, derived from the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Anonymous,
    Volunteer,
    Organization,
    Administrator,
}

impl Role {
    pub fn is_administrator(self) -> bool {
        self == Role::Administrator
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Anonymous => "anonymous",
            Role::Volunteer => "volunteer",
            Role::Organization => "organization",
            Role::Administrator => "administrator",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub(crate) enum UserSearchField {
    Id(String),
    Email(String),
}

impl fmt::Display for UserSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserSearchField::Id(id) => write!(f, "id={id}"),
            UserSearchField::Email(email) => write!(f, "email={email}"),
        }
    }
}
