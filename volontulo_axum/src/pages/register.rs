use axum::{Form, http::StatusCode, response::Response};
use serde::Deserialize;

use volontulo::register_volunteer_core;

use super::found;
use crate::config::VOLONTULO_LOGIN_URL;
use crate::error::IntoResponseError;

#[derive(Deserialize)]
pub(super) struct RegisterForm {
    email: String,
    password: String,
}

/// Sign up as a volunteer, then continue to the login page.
pub(super) async fn register(
    Form(form): Form<RegisterForm>,
) -> Result<Response, (StatusCode, String)> {
    let user = register_volunteer_core(&form.email, &form.password)
        .await
        .into_response_error()?;

    tracing::debug!(user_id = %user.id, "Volunteer registered");
    Ok(found(VOLONTULO_LOGIN_URL.as_str()))
}
