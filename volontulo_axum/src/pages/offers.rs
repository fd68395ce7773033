use askama::Template;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, Json, Response},
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use volontulo::{Offer, delete_offer_core, get_offer, list_offers};

use super::found;
use crate::config::{VOLONTULO_LOGIN_URL, VOLONTULO_OFFERS_URL, VOLONTULO_TIME_ZONE};
use crate::error::IntoResponseError;
use crate::session::AuthUser;

// Template-friendly version of Offer for display
#[derive(Debug)]
struct OfferRow {
    id: i64,
    title: String,
    location: String,
    started_at: String,
    finished_at: String,
    offer_status: &'static str,
    recruitment_status: &'static str,
    action_status: &'static str,
}

impl OfferRow {
    fn new(offer: Offer, tz: &Tz) -> Self {
        Self {
            id: offer.id,
            title: offer.title,
            location: offer.location,
            started_at: format_optional_date(offer.started_at.as_ref(), tz),
            finished_at: format_optional_date(offer.finished_at.as_ref(), tz),
            offer_status: offer.statuses.offer_status.as_str(),
            recruitment_status: offer.statuses.recruitment_status.as_str(),
            action_status: offer.statuses.action_status.as_str(),
        }
    }
}

#[derive(Template)]
#[template(path = "offers.j2", escape = "html")]
struct OfferListTemplate {
    offers: Vec<OfferRow>,
    user_email: String,
    role: String,
    can_delete: bool,
    offers_url: String,
    login_url: String,
}

/// Format a UTC timestamp in `tz` as `YYYY-MM-DD HH:MM TZ`
fn format_date_tz(date: &DateTime<Utc>, tz: &Tz) -> String {
    let local_time = date.with_timezone(tz);
    local_time.format("%Y-%m-%d %H:%M %Z").to_string()
}

fn format_optional_date(date: Option<&DateTime<Utc>>, tz: &Tz) -> String {
    date.map(|d| format_date_tz(d, tz)).unwrap_or_default()
}

pub(super) async fn list_offers_page(
    user: Option<AuthUser>,
) -> Result<Html<String>, (StatusCode, String)> {
    let offers = list_offers().await.into_response_error()?;
    let tz = &*VOLONTULO_TIME_ZONE;

    let (user_email, role, can_delete) = match &user {
        Some(user) => (
            user.email.clone(),
            user.role.to_string(),
            user.role.is_administrator(),
        ),
        None => (String::new(), "anonymous".to_string(), false),
    };

    let template = OfferListTemplate {
        offers: offers.into_iter().map(|o| OfferRow::new(o, tz)).collect(),
        user_email,
        role,
        can_delete,
        offers_url: VOLONTULO_OFFERS_URL.to_string(),
        login_url: VOLONTULO_LOGIN_URL.to_string(),
    };
    Ok(Html(template.render().map_err(|e| {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?))
}

pub(super) async fn offer_detail(
    Path(offer_id): Path<i64>,
) -> Result<Json<Offer>, (StatusCode, String)> {
    let offer = get_offer(offer_id).await.into_response_error()?;
    Ok(Json(offer))
}

/// Delete an offer and go back to the offer list.
///
/// Anyone but an administrator gets 403 and the offer stays. An administrator
/// gets 404 for an unknown offer.
pub(super) async fn delete_offer(
    user: Option<AuthUser>,
    Path(offer_id): Path<i64>,
) -> Result<Response, (StatusCode, String)> {
    let session_id = user.as_ref().map(|u| u.session_id.as_str());

    delete_offer_core(session_id, offer_id)
        .await
        .into_response_error()?;

    Ok(found(VOLONTULO_OFFERS_URL.as_str()))
}
