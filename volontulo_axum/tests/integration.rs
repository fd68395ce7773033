/// Integration tests for volontulo-axum
///
/// These tests drive the real router over HTTP against an in-memory database
/// and cache, logging in through `/login` the way a browser would.
mod common;

mod integration {
    pub mod auth_flows;
    pub mod offer_deletion;
}
