//! Shared test initialization
//!
//! SQLite functions create their tables at the point of use, so setup only
//! needs to load the environment once and run the regular store init.

use std::sync::Once;

/// Load `.env_test` (falling back to `.env`) once and initialize all stores.
pub async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });

    if let Err(e) = crate::init().await {
        eprintln!("Warning: Failed to initialize stores: {e}");
    }
}
