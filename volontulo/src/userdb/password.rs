//! PBKDF2 password hashing
//!
//! Hashes are stored as PHC strings (`$pbkdf2-sha256$i=<rounds>,l=32$<salt>$<hash>`),
//! so the round count can be raised without invalidating existing hashes.

use password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::{Params, Pbkdf2};
use std::{env, sync::LazyLock};

use crate::utils::gen_random_bytes;

use super::errors::UserError;

const SALT_LEN: usize = 16;
const OUTPUT_LEN: usize = 32;
const DEFAULT_ROUNDS: u32 = 100_000;

pub(crate) static PASSWORD_HASH_ITERATIONS: LazyLock<u32> = LazyLock::new(|| {
    env::var("PASSWORD_HASH_ITERATIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|rounds| *rounds > 0)
        .unwrap_or(DEFAULT_ROUNDS)
});

/// Minimum accepted length of a new password
pub(crate) static PASSWORD_MIN_LENGTH: LazyLock<usize> = LazyLock::new(|| {
    env::var("PASSWORD_MIN_LENGTH")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(6)
});

pub(crate) fn hash_password(password: &str) -> Result<String, UserError> {
    hash_password_with_rounds(password, *PASSWORD_HASH_ITERATIONS)
}

fn hash_password_with_rounds(password: &str, rounds: u32) -> Result<String, UserError> {
    let salt_bytes = gen_random_bytes(SALT_LEN).map_err(|e| UserError::Password(e.to_string()))?;
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| UserError::Password(e.to_string()))?;

    let params = Params {
        rounds,
        output_length: OUTPUT_LEN,
    };
    let hash = Pbkdf2
        .hash_password_customized(password.as_bytes(), None, None, params, &salt)
        .map_err(|e| UserError::Password(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks `password` against a stored PHC hash.
///
/// Returns `Ok(false)` for a wrong password. A stored hash that cannot be parsed or
/// verified is a server-side fault and yields `UserError::Password`.
pub(crate) fn verify_password(password: &str, encoded: &str) -> Result<bool, UserError> {
    let parsed = PasswordHash::new(encoded)
        .map_err(|e| UserError::Password(format!("Malformed password hash: {e}")))?;

    match Pbkdf2.verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(UserError::Password(format!(
            "Unusable password hash: {e}"
        ))),
    }
}
