use axum::{http::StatusCode, response::Json};
use serde::Serialize;

use volontulo::{Role, get_profile};

use crate::error::IntoResponseError;
use crate::session::AuthUser;

#[derive(Serialize)]
pub(super) struct ProfileResponse {
    id: String,
    email: String,
    role: Role,
    is_administrator: bool,
    organization_ids: Vec<i64>,
}

/// Profile of the logged-in user
pub(super) async fn me(user: AuthUser) -> Result<Json<ProfileResponse>, (StatusCode, String)> {
    let profile = get_profile(&user.id).await.into_response_error()?;

    Ok(Json(ProfileResponse {
        id: user.id,
        email: user.email,
        role: profile.role(),
        is_administrator: profile.is_administrator,
        organization_ids: profile.organization_ids,
    }))
}
