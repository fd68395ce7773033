use crate::offer::{
    errors::OfferError,
    types::{NewOffer, Offer, OfferStatuses},
};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

pub(crate) struct OfferStore;

impl OfferStore {
    pub(crate) async fn init() -> Result<(), OfferError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_offer_tables_sqlite(pool).await
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_offer_tables_postgres(pool).await
            }
            _ => Err(OfferError::Storage("Unsupported database type".to_string())),
        }
    }

    /// Create an offer; fails with `OrganizationNotFound` when the owner does not exist.
    #[tracing::instrument(skip(new), fields(organization_id = new.organization_id))]
    pub(crate) async fn create_offer(new: NewOffer) -> Result<Offer, OfferError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            insert_offer_sqlite(pool, new).await
        } else if let Some(pool) = store.as_postgres() {
            insert_offer_postgres(pool, new).await
        } else {
            Err(OfferError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(offer) => tracing::info!(offer_id = offer.id, "Offer created"),
            Err(e) => tracing::error!(error = %e, "Offer creation failed"),
        }

        result
    }

    pub(crate) async fn get_offer(id: i64) -> Result<Option<Offer>, OfferError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_offer_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_offer_postgres(pool, id).await
        } else {
            Err(OfferError::Storage("Unsupported database type".to_string()))
        }
    }

    pub(crate) async fn get_all_offers() -> Result<Vec<Offer>, OfferError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_all_offers_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            get_all_offers_postgres(pool).await
        } else {
            Err(OfferError::Storage("Unsupported database type".to_string()))
        }
    }

    pub(crate) async fn get_offers_by_organization(
        organization_id: i64,
    ) -> Result<Vec<Offer>, OfferError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_offers_by_organization_sqlite(pool, organization_id).await
        } else if let Some(pool) = store.as_postgres() {
            get_offers_by_organization_postgres(pool, organization_id).await
        } else {
            Err(OfferError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument]
    pub(crate) async fn update_statuses(
        id: i64,
        statuses: OfferStatuses,
    ) -> Result<(), OfferError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let updated = if let Some(pool) = store.as_sqlite() {
            update_statuses_sqlite(pool, id, statuses).await?
        } else if let Some(pool) = store.as_postgres() {
            update_statuses_postgres(pool, id, statuses).await?
        } else {
            return Err(OfferError::Storage("Unsupported database type".to_string()));
        };

        if updated == 0 {
            return Err(OfferError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument]
    pub(crate) async fn delete_offer(id: i64) -> Result<(), OfferError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let deleted = if let Some(pool) = store.as_sqlite() {
            delete_offer_sqlite(pool, id).await?
        } else if let Some(pool) = store.as_postgres() {
            delete_offer_postgres(pool, id).await?
        } else {
            return Err(OfferError::Storage("Unsupported database type".to_string()));
        };

        if deleted == 0 {
            return Err(OfferError::NotFound);
        }

        tracing::info!(offer_id = id, "Offer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::types::{ActionStatus, LegacyStatus, OfferStatus, RecruitmentStatus};
    use crate::organization::{NewOrganization, OrganizationStore};
    use crate::test_utils::init_test_environment;
    use chrono::{TimeZone, Utc};
    use serial_test::serial;

    async fn create_test_organization() -> i64 {
        OrganizationStore::create_organization(NewOrganization::default())
            .await
            .expect("Failed to create organization")
            .id
    }

    fn new_offer(organization_id: i64, status_old: LegacyStatus) -> NewOffer {
        NewOffer {
            organization_id,
            title: "volontulo offer".to_string(),
            started_at: Utc.with_ymd_and_hms(2105, 10, 24, 9, 10, 11).single(),
            finished_at: Utc.with_ymd_and_hms(2105, 11, 28, 12, 13, 14).single(),
            statuses: OfferStatuses {
                offer_status: OfferStatus::Unpublished,
                recruitment_status: RecruitmentStatus::Closed,
                action_status: ActionStatus::Ongoing,
                status_old,
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_create_and_get_offer() {
        init_test_environment().await;
        let organization_id = create_test_organization().await;

        let created = OfferStore::create_offer(new_offer(organization_id, LegacyStatus::New))
            .await
            .expect("Failed to create offer");
        assert_eq!(created.organization_id, organization_id);
        assert_eq!(created.statuses.status_old, LegacyStatus::New);
        assert_eq!(
            created.started_at,
            Utc.with_ymd_and_hms(2105, 10, 24, 9, 10, 11).single()
        );

        let fetched = OfferStore::get_offer(created.id)
            .await
            .unwrap()
            .expect("Offer should exist");
        assert_eq!(fetched, created);

        OrganizationStore::delete_organization(organization_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_create_offer_for_missing_organization() {
        init_test_environment().await;

        let result = OfferStore::create_offer(new_offer(i64::MAX, LegacyStatus::New)).await;
        assert!(
            matches!(result, Err(OfferError::OrganizationNotFound(id)) if id == i64::MAX),
            "Expected OrganizationNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_offers_by_organization() {
        init_test_environment().await;
        let first = create_test_organization().await;
        let second = create_test_organization().await;

        let a = OfferStore::create_offer(new_offer(first, LegacyStatus::New))
            .await
            .unwrap();
        let b = OfferStore::create_offer(new_offer(first, LegacyStatus::Active))
            .await
            .unwrap();
        let c = OfferStore::create_offer(new_offer(second, LegacyStatus::New))
            .await
            .unwrap();

        let ids: Vec<i64> = OfferStore::get_offers_by_organization(first)
            .await
            .unwrap()
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![a.id, b.id]);

        let all = OfferStore::get_all_offers().await.unwrap();
        assert!(all.iter().any(|o| o.id == c.id));

        OrganizationStore::delete_organization(first).await.unwrap();
        OrganizationStore::delete_organization(second).await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_update_statuses() {
        init_test_environment().await;
        let organization_id = create_test_organization().await;
        let offer = OfferStore::create_offer(new_offer(organization_id, LegacyStatus::New))
            .await
            .unwrap();

        let statuses = OfferStatuses {
            offer_status: OfferStatus::Published,
            recruitment_status: RecruitmentStatus::Open,
            action_status: ActionStatus::Finished,
            status_old: LegacyStatus::Suspended,
        };
        OfferStore::update_statuses(offer.id, statuses).await.unwrap();

        let updated = OfferStore::get_offer(offer.id).await.unwrap().unwrap();
        assert_eq!(updated.statuses, statuses);
        assert!(updated.updated_at >= offer.updated_at);

        let missing = OfferStore::update_statuses(i64::MAX, statuses).await;
        assert!(matches!(missing, Err(OfferError::NotFound)));

        OrganizationStore::delete_organization(organization_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_offer() {
        init_test_environment().await;
        let organization_id = create_test_organization().await;
        let offer = OfferStore::create_offer(new_offer(organization_id, LegacyStatus::New))
            .await
            .unwrap();

        OfferStore::delete_offer(offer.id).await.unwrap();
        assert!(OfferStore::get_offer(offer.id).await.unwrap().is_none());

        let again = OfferStore::delete_offer(offer.id).await;
        assert!(matches!(again, Err(OfferError::NotFound)));

        OrganizationStore::delete_organization(organization_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn test_deleting_organization_removes_its_offers() {
        init_test_environment().await;
        let organization_id = create_test_organization().await;
        let offer = OfferStore::create_offer(new_offer(organization_id, LegacyStatus::Active))
            .await
            .unwrap();

        OrganizationStore::delete_organization(organization_id)
            .await
            .unwrap();

        assert!(OfferStore::get_offer(offer.id).await.unwrap().is_none());
    }
}
