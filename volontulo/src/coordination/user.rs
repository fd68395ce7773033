use super::auth_helpers::load_profile;
use super::errors::CoordinationError;
use crate::organization::OrganizationStore;
use crate::userdb::{
    PASSWORD_MIN_LENGTH, User, UserProfile, UserSearchField, UserStore, hash_password,
};

/// Create a user together with its profile.
///
/// The email is trimmed and must look like an address; the password must be
/// at least `PASSWORD_MIN_LENGTH` characters long.
#[tracing::instrument(skip(password))]
pub async fn create_user_with_profile(
    email: &str,
    password: &str,
    is_administrator: bool,
) -> Result<User, CoordinationError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(CoordinationError::InvalidInput("A valid email is required".to_string()).log());
    }
    if password.chars().count() < *PASSWORD_MIN_LENGTH {
        return Err(CoordinationError::InvalidInput(format!(
            "Password must be at least {} characters",
            *PASSWORD_MIN_LENGTH
        ))
        .log());
    }

    let password_hash = hash_password(password)?;
    let user = UserStore::upsert_user(User::new(email.to_string(), password_hash)).await?;
    UserStore::set_administrator(&user.id, is_administrator).await?;

    tracing::info!(user_id = %user.id, is_administrator, "User created");
    Ok(user)
}

pub async fn get_all_users() -> Result<Vec<User>, CoordinationError> {
    UserStore::get_all_users()
        .await
        .map_err(|e| CoordinationError::Database(e.to_string()))
}

pub async fn get_user(user_id: &str) -> Result<Option<User>, CoordinationError> {
    UserStore::get_user(user_id)
        .await
        .map_err(|e| CoordinationError::Database(e.to_string()))
}

pub async fn get_user_by_email(email: &str) -> Result<Option<User>, CoordinationError> {
    UserStore::get_user_by(UserSearchField::Email(email.trim().to_string()))
        .await
        .map_err(|e| CoordinationError::Database(e.to_string()))
}

/// Delete a user; its profile and organization links go with it.
pub async fn delete_user(user_id: &str) -> Result<(), CoordinationError> {
    UserStore::get_user(user_id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("User", user_id).log())?;

    UserStore::delete_user(user_id).await?;
    tracing::info!(user_id = %user_id, "User deleted");
    Ok(())
}

pub async fn set_administrator(
    user_id: &str,
    is_administrator: bool,
) -> Result<(), CoordinationError> {
    UserStore::get_user(user_id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("User", user_id).log())?;

    UserStore::set_administrator(user_id, is_administrator).await?;
    Ok(())
}

/// Make the profile of `user_id` a representative of `organization_id`.
pub async fn add_profile_organization(
    user_id: &str,
    organization_id: i64,
) -> Result<(), CoordinationError> {
    UserStore::get_user(user_id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("User", user_id).log())?;
    OrganizationStore::get_organization(organization_id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("Organization", organization_id).log())?;

    // Users created outside `create_user_with_profile` may lack a profile row
    if UserStore::get_profile(user_id).await?.is_none() {
        UserStore::set_administrator(user_id, false).await?;
    }

    UserStore::add_profile_organization(user_id, organization_id).await?;
    Ok(())
}

pub async fn get_profile(user_id: &str) -> Result<UserProfile, CoordinationError> {
    UserStore::get_user(user_id)
        .await?
        .ok_or_else(|| CoordinationError::not_found("User", user_id).log())?;

    load_profile(user_id).await
}
