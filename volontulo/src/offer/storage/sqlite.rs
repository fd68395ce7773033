use sqlx::{Pool, Sqlite};

use crate::offer::{
    errors::OfferError,
    types::{NewOffer, Offer, OfferRow, OfferStatuses, rows_into_offers},
};
use crate::organization::DB_TABLE_ORGANIZATIONS;
use crate::storage::validate_sqlite_table_schema;

use super::config::DB_TABLE_OFFERS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), OfferError> {
    let table_name = DB_TABLE_OFFERS.as_str();
    let organizations_table = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            organization_id INTEGER NOT NULL REFERENCES {organizations_table}(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            requirements TEXT NOT NULL,
            time_commitment TEXT NOT NULL,
            benefits TEXT NOT NULL,
            location TEXT NOT NULL,
            time_period TEXT NOT NULL,
            started_at TIMESTAMP,
            finished_at TIMESTAMP,
            offer_status TEXT NOT NULL,
            recruitment_status TEXT NOT NULL,
            action_status TEXT NOT NULL,
            status_old TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    sqlx::query(&format!(
        r#"
        CREATE INDEX IF NOT EXISTS idx_{table_name}_organization_id ON {table_name}(organization_id)
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn validate_offer_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), OfferError> {
    validate_sqlite_table_schema(
        pool,
        DB_TABLE_OFFERS.as_str(),
        &[
            ("id", "INTEGER"),
            ("organization_id", "INTEGER"),
            ("title", "TEXT"),
            ("description", "TEXT"),
            ("requirements", "TEXT"),
            ("time_commitment", "TEXT"),
            ("benefits", "TEXT"),
            ("location", "TEXT"),
            ("time_period", "TEXT"),
            ("started_at", "TIMESTAMP"),
            ("finished_at", "TIMESTAMP"),
            ("offer_status", "TEXT"),
            ("recruitment_status", "TEXT"),
            ("action_status", "TEXT"),
            ("status_old", "TEXT"),
            ("created_at", "TIMESTAMP"),
            ("updated_at", "TIMESTAMP"),
        ],
        OfferError::Storage,
    )
    .await
}

pub(super) async fn insert_offer_sqlite(
    pool: &Pool<Sqlite>,
    new: NewOffer,
) -> Result<Offer, OfferError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_OFFERS.as_str();
    let now = chrono::Utc::now();

    let id = sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (
            organization_id, title, description, requirements, time_commitment,
            benefits, location, time_period, started_at, finished_at,
            offer_status, recruitment_status, action_status, status_old,
            created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#
    ))
    .bind(new.organization_id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.requirements)
    .bind(&new.time_commitment)
    .bind(&new.benefits)
    .bind(&new.location)
    .bind(&new.time_period)
    .bind(new.started_at)
    .bind(new.finished_at)
    .bind(new.statuses.offer_status.as_str())
    .bind(new.statuses.recruitment_status.as_str())
    .bind(new.statuses.action_status.as_str())
    .bind(new.statuses.status_old.as_str())
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| OfferError::from_sqlx(e, new.organization_id))?
    .last_insert_rowid();

    get_offer_sqlite(pool, id).await?.ok_or(OfferError::NotFound)
}

pub(super) async fn get_offer_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
) -> Result<Option<Offer>, OfferError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_OFFERS.as_str();

    sqlx::query_as::<_, OfferRow>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?
    .map(Offer::try_from)
    .transpose()
}

pub(super) async fn get_all_offers_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<Offer>, OfferError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_OFFERS.as_str();

    let rows = sqlx::query_as::<_, OfferRow>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY id ASC
        "#
    ))
    .fetch_all(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    rows_into_offers(rows)
}

pub(super) async fn get_offers_by_organization_sqlite(
    pool: &Pool<Sqlite>,
    organization_id: i64,
) -> Result<Vec<Offer>, OfferError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_OFFERS.as_str();

    let rows = sqlx::query_as::<_, OfferRow>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE organization_id = ? ORDER BY id ASC
        "#
    ))
    .bind(organization_id)
    .fetch_all(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    rows_into_offers(rows)
}

pub(super) async fn update_statuses_sqlite(
    pool: &Pool<Sqlite>,
    id: i64,
    statuses: OfferStatuses,
) -> Result<u64, OfferError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_OFFERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET
            offer_status = ?,
            recruitment_status = ?,
            action_status = ?,
            status_old = ?,
            updated_at = ?
        WHERE id = ?
        "#
    ))
    .bind(statuses.offer_status.as_str())
    .bind(statuses.recruitment_status.as_str())
    .bind(statuses.action_status.as_str())
    .bind(statuses.status_old.as_str())
    .bind(chrono::Utc::now())
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}

pub(super) async fn delete_offer_sqlite(pool: &Pool<Sqlite>, id: i64) -> Result<u64, OfferError> {
    create_tables_sqlite(pool).await?;

    let table_name = DB_TABLE_OFFERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}
