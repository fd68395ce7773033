use sqlx::{Pool, Postgres};

use crate::organization::{
    errors::OrganizationError,
    types::{NewOrganization, Organization},
};
use crate::storage::validate_postgres_table_schema;

use super::config::DB_TABLE_ORGANIZATIONS;

pub(super) async fn create_tables_postgres(
    pool: &Pool<Postgres>,
) -> Result<(), OrganizationError> {
    let table_name = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn validate_organization_tables_postgres(
    pool: &Pool<Postgres>,
) -> Result<(), OrganizationError> {
    validate_postgres_table_schema(
        pool,
        DB_TABLE_ORGANIZATIONS.as_str(),
        &[
            ("id", "bigint"),
            ("name", "text"),
            ("address", "text"),
            ("description", "text"),
            ("created_at", "timestamp with time zone"),
            ("updated_at", "timestamp with time zone"),
        ],
        OrganizationError::Storage,
    )
    .await
}

pub(super) async fn insert_organization_postgres(
    pool: &Pool<Postgres>,
    new: NewOrganization,
) -> Result<Organization, OrganizationError> {
    let table_name = DB_TABLE_ORGANIZATIONS.as_str();
    let now = chrono::Utc::now();

    sqlx::query_as::<_, Organization>(&format!(
        r#"
        INSERT INTO {table_name} (name, address, description, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#
    ))
    .bind(&new.name)
    .bind(&new.address)
    .bind(&new.description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))
}

pub(super) async fn get_organization_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<Organization>, OrganizationError> {
    let table_name = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query_as::<_, Organization>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))
}

pub(super) async fn get_all_organizations_postgres(
    pool: &Pool<Postgres>,
) -> Result<Vec<Organization>, OrganizationError> {
    let table_name = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query_as::<_, Organization>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY id ASC
        "#
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))
}

pub(super) async fn delete_organization_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<u64, OrganizationError> {
    let table_name = DB_TABLE_ORGANIZATIONS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}
