use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{TypedHeader, headers};
use chrono::{DateTime, Utc};
use http::{Method, StatusCode, request::Parts};

use super::config::VOLONTULO_LOGIN_URL;
use volontulo::{Role, SESSION_COOKIE_NAME, SessionUser, get_profile, get_user_from_session};

pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    fn new(method: Method) -> Self {
        Self { method }
    }

    fn into_response_with_method(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", VOLONTULO_LOGIN_URL.as_str());
            Redirect::temporary(VOLONTULO_LOGIN_URL.as_str()).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// Logged-in user, available as an Axum extractor
///
/// Extraction fails with a redirect to the login page (GET) or 401 (other
/// methods) when the request carries no live session. Use `Option<AuthUser>`
/// for pages that also serve anonymous visitors.
///
/// `role` reflects the stored profile at extraction time. Privileged
/// operations re-check it in the core library.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use volontulo_axum::AuthUser;
///
/// async fn whoami(user: AuthUser) -> String {
///     format!("{} ({})", user.email, user.role)
/// }
///
/// let app: Router = Router::new().route("/whoami", get(whoami));
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser {
    /// Unique user identifier
    pub id: String,
    /// Login email
    pub email: String,
    /// Role derived from the profile
    pub role: Role,
    /// When the user account was created
    pub created_at: DateTime<Utc>,
    /// When the user account was last updated
    pub updated_at: DateTime<Utc>,
    /// Id of the session the request was made with
    pub session_id: String,
}

impl AuthUser {
    fn from_session_user(session_user: SessionUser, role: Role, session_id: &str) -> Self {
        AuthUser {
            id: session_user.id,
            email: session_user.email,
            role,
            created_at: session_user.created_at,
            updated_at: session_user.updated_at,
            session_id: session_id.to_string(),
        }
    }
}

impl From<&AuthUser> for SessionUser {
    fn from(auth_user: &AuthUser) -> Self {
        SessionUser {
            id: auth_user.id.clone(),
            email: auth_user.email.clone(),
            created_at: auth_user.created_at,
            updated_at: auth_user.updated_at,
        }
    }
}

impl<B> FromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, _: &B) -> Result<Self, Self::Rejection> {
        let method = parts.method.clone();
        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("No cookies in request");
            AuthRedirect::new(method.clone())
        })?;

        let session_id = cookies.get(SESSION_COOKIE_NAME.as_str()).ok_or_else(|| {
            tracing::debug!(
                "No session cookie {:?} in request",
                SESSION_COOKIE_NAME.as_str()
            );
            AuthRedirect::new(method.clone())
        })?;

        let session_user = get_user_from_session(session_id).await.map_err(|e| {
            tracing::debug!("Failed to get user from session: {e}");
            AuthRedirect::new(method.clone())
        })?;

        let role = get_profile(&session_user.id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load profile: {e}");
                AuthRedirect::new(method.clone())
            })?
            .role();

        Ok(AuthUser::from_session_user(session_user, role, session_id))
    }
}

impl<B> OptionalFromRequestParts<B> for AuthUser
where
    B: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &B,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthUser as FromRequestParts<B>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_session_user_to_auth_user() {
        let now = Utc::now();
        let session_user = SessionUser {
            id: "user123".to_string(),
            email: "admin@example.com".to_string(),
            created_at: now,
            updated_at: now,
        };

        let auth_user = AuthUser::from_session_user(session_user, Role::Administrator, "sid");

        assert_eq!(auth_user.id, "user123");
        assert_eq!(auth_user.email, "admin@example.com");
        assert_eq!(auth_user.role, Role::Administrator);
        assert_eq!(auth_user.session_id, "sid");
        assert_eq!(auth_user.created_at, now);
    }

    #[test]
    fn test_from_auth_user_to_session_user() {
        let now = Utc::now();
        let auth_user = AuthUser {
            id: "user123".to_string(),
            email: "volunteer@example.com".to_string(),
            role: Role::Volunteer,
            created_at: now,
            updated_at: now,
            session_id: "sid".to_string(),
        };

        let session_user = SessionUser::from(&auth_user);

        assert_eq!(session_user.id, "user123");
        assert_eq!(session_user.email, "volunteer@example.com");
        assert_eq!(session_user.updated_at, now);
    }

    #[test]
    fn test_auth_redirect_into_response_with_method() {
        let response = AuthRedirect::new(Method::GET).into_response_with_method();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

        let response = AuthRedirect::new(Method::POST).into_response_with_method();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
