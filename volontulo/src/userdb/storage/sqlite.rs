use sqlx::{Pool, Sqlite};

use crate::organization::DB_TABLE_ORGANIZATIONS;
use crate::storage::validate_sqlite_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{ProfileRow, User, UserProfile, UserSearchField},
};

use super::config::{DB_TABLE_USER_PROFILE_ORGANIZATIONS, DB_TABLE_USER_PROFILES, DB_TABLE_USERS};

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let users_table = DB_TABLE_USERS.as_str();
    let profiles_table = DB_TABLE_USER_PROFILES.as_str();
    let profile_orgs_table = DB_TABLE_USER_PROFILE_ORGANIZATIONS.as_str();
    let organizations_table = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {users_table} (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {profiles_table} (
            user_id TEXT PRIMARY KEY NOT NULL REFERENCES {users_table}(id) ON DELETE CASCADE,
            is_administrator BOOLEAN NOT NULL DEFAULT false
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {profile_orgs_table} (
            user_id TEXT NOT NULL REFERENCES {users_table}(id) ON DELETE CASCADE,
            organization_id INTEGER NOT NULL REFERENCES {organizations_table}(id) ON DELETE CASCADE,
            PRIMARY KEY (user_id, organization_id)
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn validate_user_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    validate_sqlite_table_schema(
        pool,
        DB_TABLE_USERS.as_str(),
        &[
            ("id", "TEXT"),
            ("email", "TEXT"),
            ("password_hash", "TEXT"),
            ("created_at", "TIMESTAMP"),
            ("updated_at", "TIMESTAMP"),
        ],
        UserError::Storage,
    )
    .await?;

    validate_sqlite_table_schema(
        pool,
        DB_TABLE_USER_PROFILES.as_str(),
        &[("user_id", "TEXT"), ("is_administrator", "BOOLEAN")],
        UserError::Storage,
    )
    .await?;

    validate_sqlite_table_schema(
        pool,
        DB_TABLE_USER_PROFILE_ORGANIZATIONS.as_str(),
        &[("user_id", "TEXT"), ("organization_id", "INTEGER")],
        UserError::Storage,
    )
    .await
}

pub(super) async fn get_all_users_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<User>, UserError> {
    // In-memory databases may have been dropped with their last connection
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY created_at ASC
        "#
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn get_user_by_field_sqlite(
    pool: &Pool<Sqlite>,
    field: &UserSearchField,
) -> Result<Option<User>, UserError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();

    let (column, value) = match field {
        UserSearchField::Id(id) => ("id", id),
        UserSearchField::Email(email) => ("email", email),
    };

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE {column} = ?
        "#
    ))
    .bind(value)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn upsert_user_sqlite(pool: &Pool<Sqlite>, user: User) -> Result<User, UserError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();
    let now = chrono::Utc::now();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (id, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE SET
            email = excluded.email,
            password_hash = excluded.password_hash,
            updated_at = excluded.updated_at
        "#
    ))
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .bind(now)
    .execute(pool)
    .await
    .map_err(UserError::from_sqlx)?;

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(&user.id)
    .fetch_one(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn delete_user_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<(), UserError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn upsert_profile_sqlite(
    pool: &Pool<Sqlite>,
    user_id: &str,
    is_administrator: bool,
) -> Result<(), UserError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USER_PROFILES.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (user_id, is_administrator)
        VALUES (?, ?)
        ON CONFLICT (user_id) DO UPDATE SET
            is_administrator = excluded.is_administrator
        "#
    ))
    .bind(user_id)
    .bind(is_administrator)
    .execute(pool)
    .await
    .map_err(UserError::from_sqlx)?;

    Ok(())
}

pub(super) async fn get_profile_sqlite(
    pool: &Pool<Sqlite>,
    user_id: &str,
) -> Result<Option<UserProfile>, UserError> {
    create_tables_sqlite(pool).await?;

    let profiles_table = DB_TABLE_USER_PROFILES.as_str();
    let profile_orgs_table = DB_TABLE_USER_PROFILE_ORGANIZATIONS.as_str();

    let Some(row) = sqlx::query_as::<_, ProfileRow>(&format!(
        r#"
        SELECT user_id, is_administrator FROM {profiles_table} WHERE user_id = ?
        "#
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?
    else {
        return Ok(None);
    };

    let organization_ids: Vec<i64> = sqlx::query_scalar(&format!(
        r#"
        SELECT organization_id FROM {profile_orgs_table}
        WHERE user_id = ? ORDER BY organization_id ASC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(Some(row.into_profile(organization_ids)))
}

pub(super) async fn add_profile_organization_sqlite(
    pool: &Pool<Sqlite>,
    user_id: &str,
    organization_id: i64,
) -> Result<(), UserError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_USER_PROFILE_ORGANIZATIONS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (user_id, organization_id)
        VALUES (?, ?)
        ON CONFLICT (user_id, organization_id) DO NOTHING
        "#
    ))
    .bind(user_id)
    .bind(organization_id)
    .execute(pool)
    .await
    .map_err(UserError::from_sqlx)?;

    Ok(())
}
