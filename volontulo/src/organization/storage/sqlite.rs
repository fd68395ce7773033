use sqlx::{Pool, Sqlite};

use crate::organization::{
    errors::OrganizationError,
    types::{NewOrganization, Organization},
};
use crate::storage::validate_sqlite_table_schema;

use super::config::DB_TABLE_ORGANIZATIONS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), OrganizationError> {
    let table_name = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            description TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn validate_organization_tables_sqlite(
    pool: &Pool<Sqlite>,
) -> Result<(), OrganizationError> {
    validate_sqlite_table_schema(
        pool,
        DB_TABLE_ORGANIZATIONS.as_str(),
        &[
            ("id", "INTEGER"),
            ("name", "TEXT"),
            ("address", "TEXT"),
            ("description", "TEXT"),
            ("created_at", "TIMESTAMP"),
            ("updated_at", "TIMESTAMP"),
        ],
        OrganizationError::Storage,
    )
    .await
}

pub(super) async fn insert_organization_sqlite(
    pool: &Pool<Sqlite>,
    new: NewOrganization,
) -> Result<Organization, OrganizationError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_ORGANIZATIONS.as_str();
    let now = chrono::Utc::now();

    let id = sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (name, address, description, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#
    ))
    .bind(&new.name)
    .bind(&new.address)
    .bind(&new.description)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))?
    .last_insert_rowid();

    get_organization_sqlite(pool, id)
        .await?
        .ok_or(OrganizationError::NotFound)
}

pub(super) async fn get_organization_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<Organization>, OrganizationError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query_as::<_, Organization>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))
}

pub(super) async fn get_all_organizations_sqlite(
    pool: &Pool<Sqlite>,
) -> Result<Vec<Organization>, OrganizationError> {
    create_tables_sqlite(pool).await?;

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

pub(super) async fn delete_organization_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<u64, OrganizationError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_ORGANIZATIONS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| OrganizationError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}
