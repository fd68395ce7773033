use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::{TypedHeader, headers};

use volontulo::prepare_logout_response;

use super::found;
use crate::config::VOLONTULO_LOGIN_URL;

/// Drop the session and send the visitor to the login page.
pub(super) async fn logout(cookies: Option<TypedHeader<headers::Cookie>>) -> Response {
    let Some(TypedHeader(cookies)) = cookies else {
        return found(VOLONTULO_LOGIN_URL.as_str());
    };

    match prepare_logout_response(cookies).await {
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        Ok(headers) => (headers, found(VOLONTULO_LOGIN_URL.as_str())).into_response(),
    }
}
