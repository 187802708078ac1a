//! Opaque server-side sessions
//!
//! The alternate authentication strategy: a random token mapped to a user
//! and an expiry in the `sessions` table. Unlike bearer JWTs these can be
//! revoked immediately by deleting the row.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::models::Session;

/// Lifetime of an opaque session
pub const SESSION_TTL: Duration = Duration::days(7);

/// 32 random bytes, base64url without padding (43 chars, never contains `.`)
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Build a new session for `user_id` starting at `now`
pub fn new_session(user_id: Uuid, now: OffsetDateTime) -> Session {
    Session {
        session_token: generate_session_token(),
        user_id,
        expires_at: now + SESSION_TTL,
        created_at: now,
    }
}

/// Extract the opaque session token from a `Cookie` header value
pub fn session_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix("session_token="))
        .filter(|token| !token.is_empty())
        .map(String::from)
}
