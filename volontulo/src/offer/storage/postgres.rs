use sqlx::{Pool, Postgres};

use crate::offer::{
    errors::OfferError,
    types::{NewOffer, Offer, OfferRow, OfferStatuses, rows_into_offers},
};
use crate::organization::DB_TABLE_ORGANIZATIONS;
use crate::storage::validate_postgres_table_schema;

use super::config::DB_TABLE_OFFERS;

pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), OfferError> {
    let table_name = DB_TABLE_OFFERS.as_str();
    let organizations_table = DB_TABLE_ORGANIZATIONS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id BIGSERIAL PRIMARY KEY,
            organization_id BIGINT NOT NULL REFERENCES {organizations_table}(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            requirements TEXT NOT NULL,
            time_commitment TEXT NOT NULL,
            benefits TEXT NOT NULL,
            location TEXT NOT NULL,
            time_period TEXT NOT NULL,
            started_at TIMESTAMPTZ,
            finished_at TIMESTAMPTZ,
            offer_status TEXT NOT NULL,
            recruitment_status TEXT NOT NULL,
            action_status TEXT NOT NULL,
            status_old TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL
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

pub(super) async fn validate_offer_tables_postgres(
    pool: &Pool<Postgres>,
) -> Result<(), OfferError> {
    validate_postgres_table_schema(
        pool,
        DB_TABLE_OFFERS.as_str(),
        &[
            ("id", "bigint"),
            ("organization_id", "bigint"),
            ("title", "text"),
            ("description", "text"),
            ("requirements", "text"),
            ("time_commitment", "text"),
            ("benefits", "text"),
            ("location", "text"),
            ("time_period", "text"),
            ("started_at", "timestamp with time zone"),
            ("finished_at", "timestamp with time zone"),
            ("offer_status", "text"),
            ("recruitment_status", "text"),
            ("action_status", "text"),
            ("status_old", "text"),
            ("created_at", "timestamp with time zone"),
            ("updated_at", "timestamp with time zone"),
        ],
        OfferError::Storage,
    )
    .await
}

pub(super) async fn insert_offer_postgres(
    pool: &Pool<Postgres>,
    new: NewOffer,
) -> Result<Offer, OfferError> {
    let table_name = DB_TABLE_OFFERS.as_str();
    let now = chrono::Utc::now();

    let row = sqlx::query_as::<_, OfferRow>(&format!(
        r#"
        INSERT INTO {table_name} (
            organization_id, title, description, requirements, time_commitment,
            benefits, location, time_period, started_at, finished_at,
            offer_status, recruitment_status, action_status, status_old,
            created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        RETURNING *
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
    .fetch_one(pool)
    .await
    .map_err(|e| OfferError::from_sqlx(e, new.organization_id))?;

    Offer::try_from(row)
}

pub(super) async fn get_offer_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<Option<Offer>, OfferError> {
    let table_name = DB_TABLE_OFFERS.as_str();

    sqlx::query_as::<_, OfferRow>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?
    .map(Offer::try_from)
    .transpose()
}

pub(super) async fn get_all_offers_postgres(
    pool: &Pool<Postgres>,
) -> Result<Vec<Offer>, OfferError> {
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

pub(super) async fn get_offers_by_organization_postgres(
    pool: &Pool<Postgres>,
    organization_id: i64,
) -> Result<Vec<Offer>, OfferError> {
    let table_name = DB_TABLE_OFFERS.as_str();

    let rows = sqlx::query_as::<_, OfferRow>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE organization_id = $1 ORDER BY id ASC
        "#
    ))
    .bind(organization_id)
    .fetch_all(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    rows_into_offers(rows)
}

pub(super) async fn update_statuses_postgres(
    pool: &Pool<Postgres>,
    id: i64,
    statuses: OfferStatuses,
) -> Result<u64, OfferError> {
    let table_name = DB_TABLE_OFFERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET
            offer_status = $1,
            recruitment_status = $2,
            action_status = $3,
            status_old = $4,
            updated_at = $5
        WHERE id = $6
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

pub(super) async fn delete_offer_postgres(
    pool: &Pool<Postgres>,
    id: i64,
) -> Result<u64, OfferError> {
    let table_name = DB_TABLE_OFFERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = $1
        "#
    ))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| OfferError::Storage(e.to_string()))?;

    Ok(result.rows_affected())
}
