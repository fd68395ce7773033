use crate::organization::{
    errors::OrganizationError,
    types::{NewOrganization, Organization},
};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

pub(crate) struct OrganizationStore;

impl OrganizationStore {
    pub(crate) async fn init() -> Result<(), OrganizationError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_organization_tables_sqlite(pool).await
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_organization_tables_postgres(pool).await
            }
            _ => Err(OrganizationError::Storage(
                "Unsupported database type".to_string(),
            )),
        }
    }

    #[tracing::instrument(skip(new), fields(name = %new.name))]
    pub(crate) async fn create_organization(
        new: NewOrganization,
    ) -> Result<Organization, OrganizationError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            insert_organization_sqlite(pool, new).await
        } else if let Some(pool) = store.as_postgres() {
            insert_organization_postgres(pool, new).await
        } else {
            Err(OrganizationError::Storage(
                "Unsupported database type".to_string(),
            ))
        };

        if let Ok(organization) = &result {
            tracing::info!(organization_id = organization.id, "Organization created");
        }

        result
    }

    pub(crate) async fn get_organization(
        id: i64,
    ) -> Result<Option<Organization>, OrganizationError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_organization_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_organization_postgres(pool, id).await
        } else {
            Err(OrganizationError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    pub(crate) async fn get_all_organizations() -> Result<Vec<Organization>, OrganizationError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_all_organizations_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            get_all_organizations_postgres(pool).await
        } else {
            Err(OrganizationError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// Delete an organization; its offers and profile links go with it.
    #[tracing::instrument]
    pub(crate) async fn delete_organization(id: i64) -> Result<(), OrganizationError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let deleted = if let Some(pool) = store.as_sqlite() {
            delete_organization_sqlite(pool, id).await?
        } else if let Some(pool) = store.as_postgres() {
            delete_organization_postgres(pool, id).await?
        } else {
            return Err(OrganizationError::Storage(
                "Unsupported database type".to_string(),
            ));
        };

        if deleted == 0 {
            return Err(OrganizationError::NotFound);
        }

        tracing::info!(organization_id = id, "Organization deleted");
        Ok(())
    }
}
