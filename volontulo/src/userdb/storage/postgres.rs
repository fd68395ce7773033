use sqlx::{Pool, Postgres};

use crate::organization::DB_TABLE_ORGANIZATIONS;
use crate::storage::validate_postgres_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{ProfileRow, User, UserProfile, UserSearchField},
};

use super::config::{DB_TABLE_USER_PROFILE_ORGANIZATIONS, DB_TABLE_USER_PROFILES, DB_TABLE_USERS};

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
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
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
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
            organization_id BIGINT NOT NULL REFERENCES {organizations_table}(id) ON DELETE CASCADE,
            PRIMARY KEY (user_id, organization_id)
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn validate_user_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    validate_postgres_table_schema(
        pool,
        DB_TABLE_USERS.as_str(),
        &[
            ("id", "text"),
            ("email", "text"),
            ("password_hash", "text"),
            ("created_at", "timestamp with time zone"),
            ("updated_at", "timestamp with time zone"),
        ],
        UserError::Storage,
    )
    .await?;

    validate_postgres_table_schema(
        pool,
        DB_TABLE_USER_PROFILES.as_str(),
        &[("user_id", "text"), ("is_administrator", "boolean")],
        UserError::Storage,
    )
    .await?;

    validate_postgres_table_schema(
        pool,
        DB_TABLE_USER_PROFILE_ORGANIZATIONS.as_str(),
        &[("user_id", "text"), ("organization_id", "bigint")],
        UserError::Storage,
    )
    .await
}

pub(super) async fn get_all_users_postgres(pool: &Pool<Postgres>) -> Result<Vec<User>, UserError> {
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

pub(super) async fn get_user_by_field_postgres(
    pool: &Pool<Postgres>,
    field: &UserSearchField,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let (column, value) = match field {
        UserSearchField::Id(id) => ("id", id),
        UserSearchField::Email(email) => ("email", email),
    };

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE {column} = $1
        "#
    ))
    .bind(value)
    .fetch_optional(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))
}

pub(super) async fn upsert_user_postgres(
    pool: &Pool<Postgres>,
    user: User,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();
    let now = chrono::Utc::now();

    sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO {table_name} (id, email, password_hash, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO UPDATE SET
            email = EXCLUDED.email,
            password_hash = EXCLUDED.password_hash,
            updated_at = EXCLUDED.updated_at
        RETURNING *
        "#
    ))
    .bind(&user.id)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(UserError::from_sqlx)
}

pub(super) async fn delete_user_postgres(pool: &Pool<Postgres>, id: &str) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn upsert_profile_postgres(
    pool: &Pool<Postgres>,
    user_id: &str,
    is_administrator: bool,
) -> Result<(), UserError> {
    let table_name = DB_TABLE_USER_PROFILES.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (user_id, is_administrator)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET
            is_administrator = EXCLUDED.is_administrator
        "#
    ))
    .bind(user_id)
    .bind(is_administrator)
    .execute(pool)
    .await
    .map_err(UserError::from_sqlx)?;

    Ok(())
}

pub(super) async fn get_profile_postgres(
    pool: &Pool<Postgres>,
    user_id: &str,
) -> Result<Option<UserProfile>, UserError> {
    let profiles_table = DB_TABLE_USER_PROFILES.as_str();
    let profile_orgs_table = DB_TABLE_USER_PROFILE_ORGANIZATIONS.as_str();

    let Some(row) = sqlx::query_as::<_, ProfileRow>(&format!(
        r#"
        SELECT user_id, is_administrator FROM {profiles_table} WHERE user_id = $1
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
        WHERE user_id = $1 ORDER BY organization_id ASC
        "#
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(|e| UserError::Storage(e.to_string()))?;

    Ok(Some(row.into_profile(organization_ids)))
}

pub(super) async fn add_profile_organization_postgres(
    pool: &Pool<Postgres>,
    user_id: &str,
    organization_id: i64,
) -> Result<(), UserError> {
    let table_name = DB_TABLE_USER_PROFILE_ORGANIZATIONS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (user_id, organization_id)
        VALUES ($1, $2)
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
