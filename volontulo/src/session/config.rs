use std::env;
use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("__Host-VolontuloSession".to_string())
});

pub(crate) static SESSION_COOKIE_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    env::var("SESSION_COOKIE_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3600)
});

/// `Secure` attribute on the session cookie. Only plain-HTTP test setups turn it off.
pub(crate) static SESSION_COOKIE_SECURE: LazyLock<bool> =
    LazyLock::new(|| parse_flag(env::var("SESSION_COOKIE_SECURE").ok(), true));

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some("true") | Some("1") | Some("yes") => true,
        Some("false") | Some("0") | Some("no") => false,
        _ => default,
    }
}
