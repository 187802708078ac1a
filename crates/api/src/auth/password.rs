//! Password hashing and credential validation
//!
//! Argon2id with a per-hash random salt. The PHC string embeds algorithm,
//! parameters and salt, so verification needs nothing but the stored hash.

use std::sync::LazyLock;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::RngCore;
use regex::Regex;

use super::AuthError;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;

static USERNAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").ok());

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Hash verified against when a login names an unknown account, so the
/// response time does not reveal whether the account exists.
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| generate_impossible_hash().ok());

fn random_salt() -> Result<SaltString, AuthError> {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    SaltString::encode_b64(&bytes)
        .map_err(|e| AuthError::Internal(format!("salt encoding failed: {e}")))
}

/// Hash a password with Argon2id
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = random_salt()?;
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored PHC hash
///
/// A malformed hash is treated as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is malformed");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Burn the same amount of work as a real verification
pub fn verify_against_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

/// Produce a valid hash of a random secret nobody knows
///
/// Used for accounts created through an external identity provider: the
/// stored hash is well-formed and non-empty, but no password matches it.
pub fn generate_impossible_hash() -> Result<String, AuthError> {
    let mut secret = [0u8; 32];
    rand::rng().fill_bytes(&mut secret);
    let salt = random_salt()?;
    Argon2::default()
        .hash_password(&secret, &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))
}

pub fn validate_password_strength(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), AuthError> {
    let length = username.chars().count();
    if !(MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&length) {
        return Err(AuthError::InvalidInput(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        )));
    }

    let allowed = USERNAME_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(username));
    if !allowed {
        return Err(AuthError::InvalidInput(
            "Username may only contain letters, numbers, '_' and '-'".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), AuthError> {
    let valid = EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email));
    if !valid {
        return Err(AuthError::InvalidInput(
            "Email address is not valid".to_string(),
        ));
    }
    Ok(())
}

/// Canonical stored form of an email address
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
