//! Router for all Volontulo pages

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Create the router serving login, logout, registration and the offer pages
///
/// The endpoints are:
/// - `GET/POST /login`, `GET /logout`, `POST /register`, `GET /me`
/// - `GET /offers`, `GET /offers/{offer_id}`, `GET /offers/delete/{offer_id}`
pub fn volontulo_router() -> Router {
    volontulo_router_no_trace().layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`volontulo_router`] without the HTTP tracing middleware.
pub fn volontulo_router_no_trace() -> Router {
    super::pages::router()
}
