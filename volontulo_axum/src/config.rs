//! Central configuration for the volontulo_axum crate

use std::sync::LazyLock;

use chrono_tz::Tz;

/// Offer list, target of successful logins and deletions
/// Default: "/offers"
pub static VOLONTULO_OFFERS_URL: LazyLock<String> = LazyLock::new(|| {
    url_or_default(std::env::var("VOLONTULO_OFFERS_URL").ok(), "/offers")
});

/// Login page, target of logouts and registrations
/// Default: "/login"
pub static VOLONTULO_LOGIN_URL: LazyLock<String> =
    LazyLock::new(|| url_or_default(std::env::var("VOLONTULO_LOGIN_URL").ok(), "/login"));

/// Time zone used when rendering offer dates
/// Default: "Europe/Warsaw"
pub(crate) static VOLONTULO_TIME_ZONE: LazyLock<Tz> =
    LazyLock::new(|| parse_time_zone(std::env::var("VOLONTULO_TIME_ZONE").ok().as_deref()));

fn url_or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

fn parse_time_zone(value: Option<&str>) -> Tz {
    match value {
        None => chrono_tz::Europe::Warsaw,
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            tracing::warn!("Unknown time zone {name:?}, falling back to UTC");
            Tz::UTC
        }),
    }
}
