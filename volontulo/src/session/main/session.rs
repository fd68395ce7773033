use chrono::{DateTime, Duration, Utc};
use headers::Cookie;
use http::header::{COOKIE, HeaderMap};

use crate::session::config::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE};
use crate::session::errors::SessionError;
use crate::session::types::{StoredSession, User as SessionUser};
use crate::utils::{gen_random_string, header_set_cookie};

use crate::storage::{CacheEntry, CacheNamespace, GENERIC_CACHE_STORE};
use crate::userdb::UserStore;

/// Prepare a logout response by expiring the session cookie and deleting the session from storage
///
/// # Arguments
/// * `cookies` - The cookies from the request
///
/// # Returns
/// * `Result<HeaderMap, SessionError>` - The headers with the logout response, or an error
pub async fn prepare_logout_response(cookies: Cookie) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        "value",
        -86400,
        *SESSION_COOKIE_SECURE,
    )?;
    delete_session_from_store(cookies, SESSION_COOKIE_NAME.as_str()).await?;
    Ok(headers)
}

/// Store a new session for `user_id` and return the `Set-Cookie` headers carrying its id
pub(crate) async fn create_new_session_with_uid(user_id: &str) -> Result<HeaderMap, SessionError> {
    let max_age = *SESSION_COOKIE_MAX_AGE;
    let (expires_at, cookie_max_age) = session_expiry(max_age)?;
    let session_id = gen_random_string(32)?;

    let stored_session = StoredSession {
        user_id: user_id.to_string(),
        expires_at,
        ttl: max_age,
    };

    GENERIC_CACHE_STORE
        .lock()
        .await
        .put(
            CacheNamespace::Session,
            &session_id,
            CacheEntry::try_from(&stored_session)?,
            max_age,
        )
        .await?;

    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        &session_id,
        cookie_max_age,
        *SESSION_COOKIE_SECURE,
    )?;

    tracing::debug!(user_id = %user_id, "Created session");
    Ok(headers)
}

/// Expiry instant and cookie `Max-Age` for a session lasting `max_age` seconds
fn session_expiry(max_age: u64) -> Result<(DateTime<Utc>, i64), SessionError> {
    let out_of_range = || SessionError::Config(format!("Session max age out of range: {max_age}"));

    let seconds = i64::try_from(max_age).map_err(|_| out_of_range())?;
    let expires_at = Duration::try_seconds(seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl))
        .ok_or_else(out_of_range)?;
    Ok((expires_at, seconds))
}

async fn delete_session_from_store(cookies: Cookie, cookie_name: &str) -> Result<(), SessionError> {
    if let Some(session_id) = cookies.get(cookie_name) {
        delete_session_from_store_by_session_id(session_id).await?;
    };
    Ok(())
}

async fn delete_session_from_store_by_session_id(
    session_id: &str,
) -> Result<(), SessionError> {
    GENERIC_CACHE_STORE
        .lock()
        .await
        .remove(CacheNamespace::Session, session_id)
        .await?;
    Ok(())
}

async fn get_stored_session(session_id: &str) -> Result<StoredSession, SessionError> {
    let entry = GENERIC_CACHE_STORE
        .lock()
        .await
        .get(CacheNamespace::Session, session_id)
        .await?
        .ok_or(SessionError::NotFound)?;

    let stored_session = StoredSession::try_from(entry)?;

    if stored_session.expires_at < Utc::now() {
        tracing::debug!("Session expired at {}", stored_session.expires_at);
        delete_session_from_store_by_session_id(session_id).await?;
        return Err(SessionError::Expired);
    }

    Ok(stored_session)
}

/// Retrieves the user information from the session
///
/// # Arguments
/// * `session_id` - The session cookie value from the request
///
/// # Returns
/// * `Result<SessionUser, SessionError>` - The user behind the session, or an error when the
///   session is unknown, expired or points at a deleted user
pub async fn get_user_from_session(session_id: &str) -> Result<SessionUser, SessionError> {
    let stored_session = get_stored_session(session_id).await?;

    let user = UserStore::get_user(&stored_session.user_id)
        .await?
        .ok_or(SessionError::NotFound)?;

    Ok(SessionUser::from(user))
}

pub fn get_session_id_from_headers(headers: &HeaderMap) -> Result<Option<&str>, SessionError> {
    let Some(cookie_header) = headers.get(COOKIE) else {
        tracing::debug!("No cookie header found");
        return Ok(None);
    };

    let cookie_str = cookie_header.to_str().map_err(|e| {
        tracing::error!("Invalid cookie header: {}", e);
        SessionError::Cookie("Invalid cookie header".to_string())
    })?;

    let cookie_name = SESSION_COOKIE_NAME.as_str();

    let session_id = cookie_str.split(';').map(|s| s.trim()).find_map(|s| {
        let mut parts = s.splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(k), Some(v)) if k == cookie_name => Some(v),
            _ => None,
        }
    });

    if session_id.is_none() {
        tracing::debug!("No session cookie '{}' found in cookies", cookie_name);
    }

    Ok(session_id)
}

/// Whether the request carries a live session
pub async fn is_authenticated(headers: &HeaderMap) -> Result<bool, SessionError> {
    let Some(session_id) = get_session_id_from_headers(headers)? else {
        return Ok(false);
    };

    match get_stored_session(session_id).await {
        Ok(_) => Ok(true),
        Err(SessionError::NotFound) | Err(SessionError::Expired) => Ok(false),
        Err(e) => Err(e),
    }
}
