mod login;
mod logout;
mod offers;
mod profile;
mod register;

use axum::{
    Router,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};

/// 302 Found to `location`
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

pub(crate) fn router() -> Router<()> {
    Router::new()
        .route("/login", get(login::login_page).post(login::login_submit))
        .route("/logout", get(logout::logout))
        .route("/register", post(register::register))
        .route("/me", get(profile::me))
        .route("/offers", get(offers::list_offers_page))
        .route("/offers/{offer_id}", get(offers::offer_detail))
        .route("/offers/delete/{offer_id}", get(offers::delete_offer))
}
