use super::errors::CoordinationError;
use crate::organization::{NewOrganization, Organization, OrganizationError, OrganizationStore};

pub async fn create_organization(new: NewOrganization) -> Result<Organization, CoordinationError> {
    Ok(OrganizationStore::create_organization(new).await?)
}

pub async fn get_organization(id: i64) -> Result<Organization, CoordinationError> {
    OrganizationStore::get_organization(id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("Organization", id).log())
}

pub async fn list_organizations() -> Result<Vec<Organization>, CoordinationError> {
    Ok(OrganizationStore::get_all_organizations().await?)
}

/// Delete an organization together with its offers.
pub async fn delete_organization(id: i64) -> Result<(), CoordinationError> {
    OrganizationStore::delete_organization(id)
        .await
        .map_err(|e| match e {
            OrganizationError::NotFound => CoordinationError::not_found("Organization", id).log(),
            other => other.into(),
        })
}
