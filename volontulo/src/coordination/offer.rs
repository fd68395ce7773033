use super::auth_helpers::validate_admin_session;
use super::errors::CoordinationError;
use crate::offer::{NewOffer, Offer, OfferError, OfferStatuses, OfferStore};

pub async fn create_offer(new: NewOffer) -> Result<Offer, CoordinationError> {
    Ok(OfferStore::create_offer(new).await?)
}

pub async fn get_offer(id: i64) -> Result<Offer, CoordinationError> {
    OfferStore::get_offer(id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("Offer", id).log())
}

pub async fn list_offers() -> Result<Vec<Offer>, CoordinationError> {
    Ok(OfferStore::get_all_offers().await?)
}

pub async fn list_offers_by_organization(
    organization_id: i64,
) -> Result<Vec<Offer>, CoordinationError> {
    Ok(OfferStore::get_offers_by_organization(organization_id).await?)
}

pub async fn update_offer_statuses(
    id: i64,
    statuses: OfferStatuses,
) -> Result<Offer, CoordinationError> {
    OfferStore::update_statuses(id, statuses)
        .await
        .map_err(|e| offer_error(e, id))?;
    get_offer(id).await
}

/// Delete an offer on behalf of the requester behind `session_id`.
///
/// Only administrators may delete offers. Every other requester, including a
/// representative of the owning organization, gets [`CoordinationError::Forbidden`]
/// before the offer is looked up, so a missing offer is only reported to
/// administrators.
#[tracing::instrument(skip(session_id))]
pub async fn delete_offer_core(
    session_id: Option<&str>,
    offer_id: i64,
) -> Result<(), CoordinationError> {
    let Some(session_id) = session_id else {
        tracing::debug!("Anonymous request to delete an offer");
        return Err(CoordinationError::Forbidden.log());
    };

    let admin = match validate_admin_session(session_id).await {
        Ok(user) => user,
        Err(CoordinationError::Unauthorized) => return Err(CoordinationError::Forbidden.log()),
        Err(e) => return Err(e),
    };

    OfferStore::delete_offer(offer_id)
        .await
        .map_err(|e| offer_error(e, offer_id))?;

    tracing::info!(admin_id = %admin.id, offer_id, "Offer deleted by administrator");
    Ok(())
}

fn offer_error(err: OfferError, offer_id: i64) -> CoordinationError {
    match err {
        OfferError::NotFound => CoordinationError::not_found("Offer", offer_id).log(),
        other => other.into(),
    }
}
