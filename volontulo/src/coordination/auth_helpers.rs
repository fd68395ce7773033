//! Authorization helper functions
//!
//! Session data only identifies the user. Privileges always come from the
//! profile as currently stored, so a demoted administrator loses access on
//! the next request.

use super::errors::CoordinationError;
use crate::session::get_user_from_session;
use crate::userdb::{Role, User, UserProfile, UserStore};

/// Profile of `user_id`, falling back to a plain volunteer profile when none is stored.
pub(super) async fn load_profile(user_id: &str) -> Result<UserProfile, CoordinationError> {
    Ok(UserStore::get_profile(user_id)
        .await?
        .unwrap_or_else(|| UserProfile::volunteer(user_id)))
}

/// Role of the requester behind `session_id`.
///
/// A missing, unknown or expired session resolves to [`Role::Anonymous`].
pub async fn resolve_role(session_id: Option<&str>) -> Result<Role, CoordinationError> {
    let Some(session_id) = session_id else {
        return Ok(Role::Anonymous);
    };

    let Ok(session_user) = get_user_from_session(session_id).await else {
        return Ok(Role::Anonymous);
    };

    let role = load_profile(&session_user.id).await?.role();
    tracing::debug!(user_id = %session_user.id, role = %role, "Resolved role");
    Ok(role)
}

/// Validates that a session belongs to an administrator by checking fresh database state.
///
/// # Arguments
/// * `session_id` - The session ID to validate
///
/// # Returns
/// * `Ok(User)` - The administrator as stored in the database
/// * `Err(CoordinationError::Unauthorized)` - If the session is missing or invalid
/// * `Err(CoordinationError::Forbidden)` - If the user is not an administrator
pub async fn validate_admin_session(session_id: &str) -> Result<User, CoordinationError> {
    let session_user = get_user_from_session(session_id)
        .await
        .map_err(|_| CoordinationError::Unauthorized.log())?;

    let user = UserStore::get_user(&session_user.id)
        .await?
        .ok_or_else(|| CoordinationError::Unauthorized.log())?;

    let profile = load_profile(&user.id).await?;
    if !profile.role().is_administrator() {
        tracing::debug!(user_id = %user.id, role = %profile.role(), "User is not an administrator");
        return Err(CoordinationError::Forbidden.log());
    }

    tracing::debug!(user_id = %user.id, "Admin session validated successfully");
    Ok(user)
}
