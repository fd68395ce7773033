//! volontulo - core library of the Volontulo volunteer-coordination service
//!
//! Organizations publish offers, volunteers sign up and log in, and
//! administrators moderate. This crate holds the stores, the session handling
//! and the coordination layer enforcing who may do what.

mod coordination;
mod offer;
mod organization;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, add_profile_organization, create_offer, create_organization,
    create_user_with_profile, delete_offer_core, delete_organization, delete_user, get_all_users,
    get_offer, get_organization, get_profile, get_user, get_user_by_email, list_offers,
    list_offers_by_organization, list_organizations, login_core, register_volunteer_core,
    resolve_role, set_administrator, update_offer_statuses, validate_admin_session,
};

pub use offer::{
    ActionStatus, LegacyStatus, NewOffer, Offer, OfferError, OfferStatus, OfferStatuses,
    RecruitmentStatus,
};
pub use organization::{NewOrganization, Organization, OrganizationError};
pub use userdb::{Role, User, UserError, UserProfile};

pub use session::{
    SESSION_COOKIE_NAME, SessionError, User as SessionUser, get_session_id_from_headers,
    get_user_from_session, is_authenticated, prepare_logout_response,
};
pub use storage::StorageError;
pub use utils::UtilError;

/// Initialize the stores. Organizations come first because users and offers reference them.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    storage::init().await?;
    organization::init().await?;
    userdb::init().await?;
    offer::init().await?;
    Ok(())
}
