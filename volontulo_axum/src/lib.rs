//! volontulo-axum - Axum integration for the Volontulo service
//!
//! Provides the page router, the [`AuthUser`] extractor and the mapping of
//! core errors to HTTP status codes.

mod config;
mod error;
mod pages;
mod router;
mod session;

pub use config::{VOLONTULO_LOGIN_URL, VOLONTULO_OFFERS_URL};
pub use error::IntoResponseError;
pub use router::{volontulo_router, volontulo_router_no_trace};
pub use session::{AuthRedirect, AuthUser};

// Re-export the initialization function from the core crate
pub use volontulo::init;
