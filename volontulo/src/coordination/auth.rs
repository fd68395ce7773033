use http::HeaderMap;

use super::errors::CoordinationError;
use super::user::create_user_with_profile;
use crate::session::{User as SessionUser, create_new_session_with_uid};
use crate::userdb::{User, UserSearchField, UserStore, verify_password};

/// Check `email` and `password` and open a session for the matching user.
///
/// Returns the session user and the headers setting the session cookie. An
/// unknown email and a wrong password produce the same error.
#[tracing::instrument(skip(password))]
pub async fn login_core(
    email: &str,
    password: &str,
) -> Result<(SessionUser, HeaderMap), CoordinationError> {
    let email = email.trim();

    let user = UserStore::get_user_by(UserSearchField::Email(email.to_string()))
        .await?
        .ok_or_else(invalid_credentials)?;

    if !verify_password(password, &user.password_hash)? {
        return Err(invalid_credentials());
    }

    let headers = create_new_session_with_uid(&user.id).await?;
    tracing::info!(user_id = %user.id, "User logged in");

    Ok((SessionUser::from(user), headers))
}

fn invalid_credentials() -> CoordinationError {
    CoordinationError::Authentication("Invalid email or password".to_string()).log()
}

/// Sign up a volunteer: a user with a non-administrator profile and no organizations.
#[tracing::instrument(skip(password))]
pub async fn register_volunteer_core(
    email: &str,
    password: &str,
) -> Result<User, CoordinationError> {
    create_user_with_profile(email, password, false).await
}
